use alloc::string::String;

use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ScanErrorKind {
    #[error("Namespace root `{root}` can't be resolved: no catalog entry lives under it")]
    UnresolvedRoot { root: String },
    #[error("Entry `{}` can't be loaded: malformed namespace `{namespace}`", .type_info.name)]
    MalformedEntry { namespace: String, type_info: TypeInfo },
}
