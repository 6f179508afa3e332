//! End-to-end generation into a temporary directory.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crudhook_codegen_typescript::{GenerateResult, Generator, GeneratorOptions, LanguageCodegen};
use crudhook_core::ManifestUpdate;
use crudhook_schema::{EntityName, HooksLayout, Schema};
use tempfile::TempDir;

const USER_SCHEMA: &str = r#"{
    "id": { "name": "id", "type": "string" },
    "email": { "name": "email", "type": "string" }
}"#;

/// Parse, then generate. Mirrors what the CLI does for one invocation.
fn run(root: &Path, entity: &str, schema_json: &str, hooks: HooksLayout) -> eyre::Result<GenerateResult> {
    let schema = Schema::from_json_str(schema_json, "schema.json")?;
    let entity = EntityName::new(entity)?;
    let options = GeneratorOptions {
        hooks,
        ..GeneratorOptions::default()
    };
    Generator::new(&entity, schema, options).generate(root)
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

fn all_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Value of every `const queryKey = '...';` in `code`.
fn query_keys(code: &str) -> Vec<String> {
    code.lines()
        .filter_map(|line| line.trim().strip_prefix("const queryKey = '"))
        .filter_map(|rest| rest.strip_suffix("';"))
        .map(str::to_string)
        .collect()
}

/// Names declared with `export const|type|interface` in `code`.
fn declared_exports(code: &str) -> BTreeSet<String> {
    code.lines()
        .filter_map(|line| {
            ["export const ", "export type ", "export interface "]
                .iter()
                .find_map(|prefix| line.strip_prefix(prefix))
        })
        .filter_map(|rest| {
            rest.split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .next()
                .map(str::to_string)
        })
        .collect()
}

/// Names re-exported by `export { .. } from` / `export type { .. } from` lines.
fn reexported(code: &str) -> BTreeSet<String> {
    code.lines()
        .filter_map(|line| {
            let open = line.find('{')?;
            let close = line.find('}')?;
            Some(line[open + 1..close].to_string())
        })
        .flat_map(|names| {
            names
                .split(',')
                .map(|n| n.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|n| !n.is_empty())
        .collect()
}

#[test]
fn test_user_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    for _ in 0..3 {
        run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    }

    let client = read(root.join("User/api/userRequest.ts"));
    assert!(client.contains("url: `${BASE_URL}/users/`,"));

    let types = read(root.join("User/types/userTypes.ts"));
    assert!(types.starts_with("export interface UserType {\n  id: string;\n  email: string;\n}\n"));

    let manifest = read(root.join("index.ts"));
    assert_eq!(manifest, "export * from './User';\n");
}

#[test]
fn test_reports_written_files_and_manifest() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let first = run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    assert_eq!(first.written.len(), 4);
    assert!(first.written.iter().all(|p| p.starts_with(root) && p.exists()));
    assert_eq!(first.manifest_path, root.join("index.ts"));
    assert_eq!(first.manifest, ManifestUpdate::Appended);

    let second = run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    assert_eq!(second.manifest, ManifestUpdate::AlreadyPresent);
}

#[test]
fn test_generation_is_deterministic() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    run(a.path(), "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    run(b.path(), "User", USER_SCHEMA, HooksLayout::Single).unwrap();

    let files_a = all_files(a.path());
    let files_b = all_files(b.path());
    assert_eq!(files_a.len(), files_b.len());
    for (fa, fb) in files_a.iter().zip(&files_b) {
        assert_eq!(
            fa.strip_prefix(a.path()).unwrap(),
            fb.strip_prefix(b.path()).unwrap()
        );
        assert_eq!(fs::read(fa).unwrap(), fs::read(fb).unwrap(), "{}", fa.display());
    }
}

#[test]
fn test_rerun_overwrites_with_identical_content() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    let before = read(root.join("User/model/requestHooks.ts"));

    fs::write(root.join("User/model/requestHooks.ts"), "// edited\n").unwrap();
    run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();

    assert_eq!(read(root.join("User/model/requestHooks.ts")), before);
}

#[test]
fn test_url_segment_matches_query_key() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    run(root, "Category", "{}", HooksLayout::Single).unwrap();

    let client = read(root.join("Category/api/categoryRequest.ts"));
    let hooks = read(root.join("Category/model/requestHooks.ts"));

    let keys = query_keys(&hooks);
    assert_eq!(keys.len(), 5);
    for key in &keys {
        assert!(client.contains(&format!("${{BASE_URL}}/{}/", key)), "{key}");
    }
}

#[test]
fn test_mutations_invalidate_the_list_key() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    run(root, "User", USER_SCHEMA, HooksLayout::PerOperation).unwrap();

    let list = read(root.join("User/model/useGetUsers.ts"));
    let list_key = query_keys(&list);
    assert_eq!(list_key.len(), 1);
    assert!(list.contains("    [queryKey],\n"));

    for hook in ["useCreateUser", "useUpdateUser", "useDeleteUser"] {
        let code = read(root.join(format!("User/model/{hook}.ts")));
        assert_eq!(query_keys(&code), list_key, "{hook}");
        assert!(
            code.contains("onSuccess: () => queryClient.invalidateQueries([queryKey]),"),
            "{hook}"
        );
    }
}

#[test]
fn test_barrel_reexports_exactly_the_declared_symbols() {
    for layout in [HooksLayout::Single, HooksLayout::PerOperation] {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        run(root, "User", USER_SCHEMA, layout).unwrap();

        let entity_dir = root.join("User");
        let barrel = read(entity_dir.join("index.ts"));
        let declared: BTreeSet<String> = all_files(&entity_dir)
            .iter()
            .filter(|p| p.file_name().is_some_and(|n| n != "index.ts"))
            .flat_map(|p| declared_exports(&read(p)))
            .collect();

        assert_eq!(reexported(&barrel), declared, "{layout}");
    }
}

#[test]
fn test_field_order_is_preserved() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let schema = r#"{
        "zeta": { "name": "c", "type": "boolean" },
        "alpha": { "name": "a", "type": "string" },
        "mid": { "name": "b", "type": "number" }
    }"#;
    run(root, "Item", schema, HooksLayout::Single).unwrap();

    let types = read(root.join("Item/types/itemTypes.ts"));
    assert!(types.starts_with(
        "export interface ItemType {\n  c: boolean;\n  a: string;\n  b: number;\n}\n"
    ));
}

#[test]
fn test_malformed_schema_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let schema = r#"{
        "id": { "name": "id", "type": "string" },
        "email": { "name": "email" }
    }"#;

    let err = run(root, "User", schema, HooksLayout::Single).unwrap_err();

    assert!(err.to_string().contains("malformed schema entry 'email'"));
    assert!(all_files(root).is_empty());
}

#[test]
fn test_invalid_json_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    assert!(run(root, "User", "{ not json", HooksLayout::Single).is_err());
    assert!(all_files(root).is_empty());
}

#[test]
fn test_manifest_keeps_other_entities() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    run(root, "UserProfile", "{}", HooksLayout::Single).unwrap();
    run(root, "User", USER_SCHEMA, HooksLayout::Single).unwrap();
    run(root, "UserProfile", "{}", HooksLayout::Single).unwrap();

    assert_eq!(
        read(root.join("index.ts")),
        "export * from './UserProfile';\nexport * from './User';\n"
    );
}

#[test]
fn test_preview_matches_written_content() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let schema = Schema::from_json_str(USER_SCHEMA, "user.json").unwrap();
    let entity = EntityName::new("User").unwrap();
    let generator = Generator::new(&entity, schema, GeneratorOptions::default());

    let preview = generator.preview();
    assert!(all_files(root).is_empty());

    generator.generate(root).unwrap();
    for file in preview {
        assert_eq!(read(root.join(&file.path)), file.content, "{}", file.path);
    }
}

#[test]
fn test_unwritable_root_reports_path() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = run(&blocker, "User", USER_SCHEMA, HooksLayout::Single).unwrap_err();

    let chain = format!("{:?}", err);
    assert!(chain.contains("User/api/userRequest.ts"), "{chain}");
}
