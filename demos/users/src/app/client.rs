use beanery::InstantiatorResult;
use beanery_auto::component;

pub trait WebClient: Send + Sync {
    fn get(&self, url: &str) -> String;
}

pub struct ExternalWebClient;

impl WebClient for ExternalWebClient {
    fn get(&self, url: &str) -> String {
        tracing::info!(url, "Fetching");
        "externalUser1, externalUser2".to_owned()
    }
}

#[component(implements(dyn WebClient))]
impl ExternalWebClient {
    #[constructor]
    fn new() -> InstantiatorResult<Self> {
        Ok(Self)
    }
}
