use crate::error::Result;
use crate::provider::{ProviderDefinition, ResolvedConfig, SecretResolver};

/// 基础配置：回调地址 + 解析后的 client id / secret，默认请求邮箱
pub fn build(
    provider: &ProviderDefinition,
    callback_url: &str,
    secrets: &dyn SecretResolver,
) -> Result<ResolvedConfig> {
    let client_id = secrets.resolve(&provider.client_id)?;
    let client_secret = secrets.resolve(&provider.client_secret)?;

    Ok(ResolvedConfig::new(callback_url, client_id, client_secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticSecretResolver;

    #[test]
    fn literal_and_env_credentials() {
        let secrets = StaticSecretResolver::new().with_var("FB_SECRET", "s3cr3t");
        let provider = ProviderDefinition::new("Facebook", "facebook")
            .with_credentials("1234567890", "$FB_SECRET");

        let config = build(&provider, "https://site/cb", &secrets).unwrap();
        assert_eq!(config.credentials.id, "1234567890");
        assert_eq!(config.credentials.secret, "s3cr3t");
        assert!(config.include_email);
        assert!(config.extra.is_empty());
    }
}
