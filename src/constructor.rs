use crate::{
    component::{ComponentDescriptor, Constructor},
    dependency::Dependency,
    errors::InstantiatorErrorKind,
};

/// The constructor chosen for one registration attempt.
#[derive(Debug)]
pub(crate) struct ConstructorPlan<'a> {
    pub(crate) constructor: &'a Constructor,
}

impl ConstructorPlan<'_> {
    #[inline]
    pub(crate) fn dependencies(&self) -> &[Dependency] {
        self.constructor.dependencies()
    }
}

/// Picks the constructor with the most parameters, the first declared one on ties.
pub(crate) fn select(descriptor: &ComponentDescriptor) -> Result<ConstructorPlan<'_>, InstantiatorErrorKind> {
    let mut selected: Option<&Constructor> = None;
    for constructor in descriptor.constructors() {
        match selected {
            Some(current) if constructor.dependencies().len() <= current.dependencies().len() => {}
            _ => selected = Some(constructor),
        }
    }

    match selected {
        Some(constructor) => Ok(ConstructorPlan { constructor }),
        None => Err(InstantiatorErrorKind::NoConstructor {
            type_info: descriptor.type_info(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::select;
    use crate::{any::TypeInfo, component::ComponentDescriptor, errors::InstantiatorErrorKind, inject::Inject};

    struct UserRepository;
    struct ExternalWebClient;
    struct UserServiceImpl;

    #[test]
    fn test_select_most_parameters() {
        let descriptor = ComponentDescriptor::of::<UserServiceImpl>("app::services")
            .constructor(|| Ok(UserServiceImpl))
            .constructor(|Inject(_): Inject<UserRepository>, Inject(_): Inject<ExternalWebClient>| Ok(UserServiceImpl))
            .constructor(|Inject(_): Inject<UserRepository>| Ok(UserServiceImpl))
            .build();

        let plan = select(&descriptor).unwrap();
        assert_eq!(plan.dependencies().len(), 2);
        assert_eq!(plan.dependencies()[1].type_info, TypeInfo::of::<ExternalWebClient>());
    }

    #[test]
    fn test_select_first_on_tie() {
        let descriptor = ComponentDescriptor::of::<UserServiceImpl>("app::services")
            .constructor(|Inject(_): Inject<UserRepository>| Ok(UserServiceImpl))
            .constructor(|Inject(_): Inject<ExternalWebClient>| Ok(UserServiceImpl))
            .build();

        let plan = select(&descriptor).unwrap();
        assert_eq!(plan.dependencies()[0].type_info, TypeInfo::of::<UserRepository>());
    }

    #[test]
    fn test_select_no_constructor() {
        let descriptor = ComponentDescriptor::of::<UserRepository>("app::repositories").build();

        match select(&descriptor) {
            Err(InstantiatorErrorKind::NoConstructor { type_info }) => assert_eq!(type_info, TypeInfo::of::<UserRepository>()),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
