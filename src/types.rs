use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct StorageContext {
    pub upload_endpoint: String,
    pub public_key: String,
    pub private_key: String,
}

#[derive(Clone)]
pub struct VisionContext {
    pub api_endpoint: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub storage: StorageContext,
    pub vision: VisionContext,
}

impl From<Config> for Context {
    fn from(config: Config) -> Self {
        Self {
            app: AppContext {
                host: config.app.host,
                port: config.app.port,
            },
            storage: StorageContext {
                upload_endpoint: config.storage.upload_endpoint,
                public_key: config.storage.public_key,
                private_key: config.storage.private_key,
            },
            vision: VisionContext {
                api_endpoint: config.vision.api_endpoint,
                api_key: config.vision.api_key,
                model: config.vision.model,
            },
        }
    }
}
