use beanery::{utils::thread_safety::RcThreadSafety, Inject, InstantiatorResult};
use beanery_auto::component;

use super::{client::WebClient, repositories::UserRepository};

pub trait UserService: Send + Sync {
    fn users(&self) -> Vec<String>;
}

/// Users stored locally.
pub struct UserServiceImpl {
    repository: RcThreadSafety<UserRepository>,
}

#[component(name = "localUsers", implements(dyn UserService))]
impl UserServiceImpl {
    #[constructor]
    fn new(Inject(repository): Inject<UserRepository>) -> InstantiatorResult<Self> {
        Ok(Self { repository })
    }
}

impl UserService for UserServiceImpl {
    fn users(&self) -> Vec<String> {
        self.repository.find_all().to_vec()
    }
}

/// Users fetched from the external API. Sorts before [`UserServiceImpl`], so it's the one bound to `dyn UserService`.
pub struct UserApiServiceImpl {
    client: RcThreadSafety<dyn WebClient>,
}

#[component(implements(dyn UserService))]
impl UserApiServiceImpl {
    #[constructor]
    fn new(Inject(client): Inject<dyn WebClient>) -> InstantiatorResult<Self> {
        Ok(Self { client })
    }
}

impl UserService for UserApiServiceImpl {
    fn users(&self) -> Vec<String> {
        self.client.get("/users").split(", ").map(str::to_owned).collect()
    }
}
