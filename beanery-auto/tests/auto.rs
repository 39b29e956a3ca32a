#![no_std]

extern crate alloc;

use alloc::{format, string::String, vec::Vec};
use beanery::{utils::thread_safety::RcThreadSafety, Catalog, Config, Context, ResolveErrorKind};
use beanery_auto::{entry_getters::__COMPONENTS, AutoCatalog as _};

mod app {
    pub(crate) mod repositories {
        use alloc::vec::Vec;
        use beanery::InstantiateErrorKind;
        use beanery_auto::component;

        pub(crate) struct UserRepository;

        #[component]
        impl UserRepository {
            #[constructor]
            fn new() -> Result<Self, InstantiateErrorKind> {
                Ok(Self)
            }

            pub(crate) fn find_all(&self) -> Vec<&'static str> {
                alloc::vec!["user1", "user2"]
            }
        }
    }

    pub(crate) mod client {
        use beanery::InstantiateErrorKind;
        use beanery_auto::component;

        pub(crate) trait WebClient: Send + Sync {
            fn get(&self, url: &str) -> &'static str;
        }

        pub(crate) struct ExternalWebClient;

        impl WebClient for ExternalWebClient {
            fn get(&self, _url: &str) -> &'static str {
                "externalUser1, externalUser2"
            }
        }

        #[component(implements(dyn WebClient))]
        impl ExternalWebClient {
            #[constructor]
            fn new() -> Result<Self, InstantiateErrorKind> {
                Ok(Self)
            }
        }
    }

    pub(crate) mod services {
        use alloc::vec::Vec;
        use beanery::{utils::thread_safety::RcThreadSafety, Inject, InstantiateErrorKind};
        use beanery_auto::component;

        use super::{client::WebClient, repositories::UserRepository};

        pub(crate) trait UserService: Send + Sync {
            fn users(&self) -> Vec<&'static str>;
        }

        pub(crate) struct UserServiceImpl {
            pub(crate) repository: RcThreadSafety<UserRepository>,
        }

        #[component(name = "localUsers", implements(dyn UserService))]
        impl UserServiceImpl {
            #[constructor]
            fn new(Inject(repository): Inject<UserRepository>) -> Result<Self, InstantiateErrorKind> {
                Ok(Self { repository })
            }
        }

        impl UserService for UserServiceImpl {
            fn users(&self) -> Vec<&'static str> {
                self.repository.find_all()
            }
        }

        pub(crate) struct UserApiServiceImpl {
            client: RcThreadSafety<dyn WebClient>,
        }

        #[component(implements(dyn UserService))]
        impl UserApiServiceImpl {
            #[constructor]
            fn new(Inject(client): Inject<dyn WebClient>) -> Result<Self, InstantiateErrorKind> {
                Ok(Self { client })
            }
        }

        impl UserService for UserApiServiceImpl {
            fn users(&self) -> Vec<&'static str> {
                self.client.get("/users").split(", ").collect()
            }
        }
    }

    pub(crate) mod broken {
        use beanery::InstantiateErrorKind;
        use beanery_auto::component;

        pub(crate) struct Unconfigured;

        #[component]
        impl Unconfigured {
            #[constructor]
            fn new() -> Result<Self, InstantiateErrorKind> {
                Err(anyhow::anyhow!("missing settings").into())
            }

            #[constructor]
            fn with_default(_: Option<beanery::Inject<super::repositories::UserRepository>>) -> Result<Self, InstantiateErrorKind> {
                Err(anyhow::anyhow!("missing settings").into())
            }
        }
    }
}

use app::{
    broken::Unconfigured,
    client::{ExternalWebClient, WebClient},
    repositories::UserRepository,
    services::{UserApiServiceImpl, UserService, UserServiceImpl},
};

fn root(namespace: &str) -> String {
    format!("{}::{namespace}", module_path!())
}

#[test]
fn test_components_count() {
    assert_eq!(__COMPONENTS.len(), 5);
}

#[test]
fn test_catalog_sorted_by_namespace() {
    let catalog = Catalog::new().provide_auto_components();

    let namespaces = catalog.entries().iter().map(|entry| entry.namespace()).collect::<Vec<_>>();
    assert_eq!(
        namespaces,
        [root("app::broken"), root("app::client"), root("app::repositories"), root("app::services"), root("app::services")]
    );
    assert_eq!(catalog.entries()[3].type_info().short_name(), "UserApiServiceImpl");
}

#[test]
fn test_context_from_auto_catalog() {
    let catalog = Catalog::new().provide_auto_components();
    let context = Context::new(&catalog, &Config::new().base_package(root("app"))).unwrap();

    let users = context.get::<dyn UserService>().unwrap();
    assert_eq!(users.users(), ["externalUser1", "externalUser2"]);

    let local = context.get_by_name::<dyn UserService>("localUsers").unwrap();
    assert_eq!(local.users(), ["user1", "user2"]);

    let service = context.get::<UserServiceImpl>().unwrap();
    let repository = context.get::<UserRepository>().unwrap();
    assert!(RcThreadSafety::ptr_eq(&service.repository, &repository));

    assert_eq!(context.get::<dyn WebClient>().unwrap().get("/users"), "externalUser1, externalUser2");
    assert!(context.contains::<ExternalWebClient>());
    assert!(context.contains::<UserApiServiceImpl>());
    assert!(matches!(
        context.get::<Unconfigured>(),
        Err(ResolveErrorKind::NotConstructed { .. })
    ));
    assert_eq!(
        context.bean_names(),
        ["externalWebClient", "localUsers", "userApiServiceImpl", "userRepository"]
    );
}

#[test]
fn test_narrow_root() {
    let catalog = Catalog::new().provide_auto_components();
    let context = Context::new(&catalog, &Config::new().base_package(root("app::repositories"))).unwrap();

    assert!(context.get::<UserRepository>().is_ok());
    assert!(matches!(context.get::<dyn UserService>(), Err(ResolveErrorKind::NoBean { .. })));
    assert_eq!(context.len(), 1);
}
