//! Names derived from an entity name.
//!
//! Every identifier, URL segment, module path and file stem the emitters use
//! comes from [`DerivedNames`], computed once per run.

use crudhook_schema::EntityName;

/// Words that cannot be used as a binding name in an ES module.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Names every generated hook already declares in its own scope.
const HOOK_LOCALS: &[&str] = &["id", "queryKey", "queryClient"];

/// Whether `name` is reserved in TypeScript.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Escape `name` with a leading underscore if it is reserved.
pub fn safe_name(name: &str) -> String {
    if is_reserved(name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// Escape a hook-local binding that would be reserved or would redeclare a
/// name the hook body already declares.
fn binding_name(name: &str) -> String {
    if HOOK_LOCALS.contains(&name) {
        format!("_{}", name)
    } else {
        safe_name(name)
    }
}

/// The five CRUD operations every entity gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOp {
    List,
    GetById,
    Create,
    Update,
    Delete,
}

impl CrudOp {
    /// All operations in declaration order.
    pub const ALL: [CrudOp; 5] = [
        CrudOp::List,
        CrudOp::GetById,
        CrudOp::Create,
        CrudOp::Update,
        CrudOp::Delete,
    ];

    pub fn http_method(self) -> &'static str {
        match self {
            CrudOp::List | CrudOp::GetById => "GET",
            CrudOp::Create => "POST",
            CrudOp::Update => "PATCH",
            CrudOp::Delete => "DELETE",
        }
    }

    /// Whether the request URL ends with the entity id.
    pub fn targets_item(self) -> bool {
        matches!(self, CrudOp::GetById | CrudOp::Update | CrudOp::Delete)
    }

    /// The mutation verb, `None` for reads.
    pub fn verb(self) -> Option<&'static str> {
        match self {
            CrudOp::List | CrudOp::GetById => None,
            CrudOp::Create => Some("create"),
            CrudOp::Update => Some("update"),
            CrudOp::Delete => Some("delete"),
        }
    }

    pub fn is_mutation(self) -> bool {
        self.verb().is_some()
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Identifiers, paths and keys shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The entity name as given; base of type and symbol names.
    pub entity: String,
    /// Lower-cased entity name; base of file stems and bindings.
    pub lower: String,
    /// `lower` with an `s` suffix; URL segment and cache key.
    pub collection: String,

    pub entity_type: String,
    pub request_type: String,
    pub response_type: String,
    pub api_client_type: String,
    pub update_request_type: String,

    pub api_client: String,

    /// Binding for a single fetched entity.
    pub item_binding: String,
    /// Binding for the fetched list.
    pub list_binding: String,

    pub client_stem: String,
    pub types_stem: String,
    pub hooks_stem: String,

    operations: [String; 5],
    hooks: [String; 5],
}

impl DerivedNames {
    /// Derive every name from the entity name.
    ///
    /// Pluralization appends `s` to the lower-cased name; irregular plurals
    /// are not special-cased.
    pub fn derive(entity: &EntityName) -> Self {
        let e = entity.as_str();
        let lower = e.to_lowercase();
        let collection = format!("{}s", lower);

        Self {
            entity: e.to_string(),
            entity_type: format!("{e}Type"),
            request_type: format!("{e}RequestType"),
            response_type: format!("{e}ResponseType"),
            api_client_type: format!("{e}ApiClientType"),
            update_request_type: format!("Update{e}RequestType"),
            api_client: format!("{lower}ApiClient"),
            item_binding: binding_name(&lower),
            list_binding: binding_name(&collection),
            client_stem: format!("{lower}Request"),
            types_stem: format!("{lower}Types"),
            hooks_stem: "requestHooks".to_string(),
            operations: [
                format!("get{e}s"),
                format!("get{e}ById"),
                format!("create{e}"),
                format!("update{e}"),
                format!("delete{e}"),
            ],
            hooks: [
                format!("useGet{e}s"),
                format!("useGet{e}ById"),
                format!("useCreate{e}"),
                format!("useUpdate{e}"),
                format!("useDelete{e}"),
            ],
            lower,
            collection,
        }
    }

    /// Client function name for `op`.
    pub fn operation(&self, op: CrudOp) -> &str {
        &self.operations[op.index()]
    }

    /// Hook name for `op`.
    pub fn hook(&self, op: CrudOp) -> &str {
        &self.hooks[op.index()]
    }

    /// `mutate` callback name exposed by a mutation hook.
    pub fn callback(&self, op: CrudOp) -> Option<String> {
        op.verb()
            .map(|verb| format!("on{}{}", capitalize(verb), self.entity))
    }

    /// Cache key shared by every read and invalidated by every mutation.
    pub fn query_key(&self) -> &str {
        &self.collection
    }

    /// Directory holding the entity's artifacts, relative to the target root.
    pub fn entity_dir(&self) -> &str {
        &self.entity
    }

    /// Module specifier of the entity directory, relative to the target root.
    pub fn entity_module(&self) -> String {
        format!("./{}", self.entity)
    }

    /// Line the shared manifest carries for this entity.
    pub fn manifest_line(&self) -> String {
        format!("export * from '{}';", self.entity_module())
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
