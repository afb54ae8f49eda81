use std::env;

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub upload_endpoint: String,
    pub public_key: String,
    pub private_key: String,
}

#[derive(Clone)]
pub struct VisionConfig {
    pub api_endpoint: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub vision: VisionConfig,
}

pub fn get_config() -> Config {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u32>()
        .expect("Invalid PORT number");
    let storage_upload_endpoint =
        env::var("STORAGE_UPLOAD_ENDPOINT").expect("STORAGE_UPLOAD_ENDPOINT not set");
    let storage_public_key = env::var("STORAGE_PUBLIC_KEY").expect("STORAGE_PUBLIC_KEY not set");
    let storage_private_key = env::var("STORAGE_PRIVATE_KEY").expect("STORAGE_PRIVATE_KEY not set");
    let vision_api_endpoint =
        env::var("VISION_API_ENDPOINT").expect("VISION_API_ENDPOINT not set");
    let vision_api_key = env::var("VISION_API_KEY").expect("VISION_API_KEY not set");
    let vision_model = env::var("VISION_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

    return Config {
        app: AppConfig { host, port },
        storage: StorageConfig {
            upload_endpoint: storage_upload_endpoint,
            public_key: storage_public_key,
            private_key: storage_private_key,
        },
        vision: VisionConfig {
            api_endpoint: vision_api_endpoint,
            api_key: vision_api_key,
            model: vision_model,
        },
    };
}
