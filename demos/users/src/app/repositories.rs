use beanery::InstantiatorResult;
use beanery_auto::component;

pub struct UserRepository {
    users: Vec<String>,
}

#[component]
impl UserRepository {
    #[constructor]
    fn new() -> InstantiatorResult<Self> {
        Ok(Self {
            users: vec!["user1".to_owned(), "user2".to_owned()],
        })
    }

    pub fn find_all(&self) -> &[String] {
        &self.users
    }
}
