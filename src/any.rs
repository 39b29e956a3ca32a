use core::{
    any::{type_name, TypeId},
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

/// Identity of a type known to the container.
///
/// Equality and ordering use only the [`TypeId`], the name is kept for diagnostics and naming.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Last path segment of the type name, without generic arguments.
    ///
    /// `app::services::UserService<app::Repo>` gives `UserService`, `dyn app::client::WebClient + Send` gives `WebClient`.
    /// For references, slices, arrays and tuples it's the name of the first type inside: `(app::Flaky, u8)` gives `Flaky`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        let mut name = self.name;
        loop {
            let trimmed = name.trim_start_matches(['&', '(', '[', '*', ' ']);
            let trimmed = ["mut ", "const ", "dyn ", "impl "]
                .iter()
                .fold(trimmed, |rest, prefix| rest.strip_prefix(prefix).unwrap_or(rest));
            if trimmed == name {
                break;
            }
            name = trimmed;
        }

        let path = name
            .find(['<', ',', ';', ')', ']', ' '])
            .map_or(name, |end| &name[..end]);
        path.rsplit_once("::").map_or(path, |(_, name)| name)
    }
}
