use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub chain: ChainConfig,
    pub tokens: TokenConfig,
    pub sale: SaleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub network_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Interval between transaction refreshes for scripted tokens in seconds (default: 300)
    pub tx_refresh_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleConfig {
    /// Decimal places of ether kept from an asking price (default: 3, whole finney)
    pub price_decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chain: ChainConfig {
                chain_id: 1,
                network_name: "Ethereum".to_string(),
            },
            tokens: TokenConfig {
                tx_refresh_interval_secs: 300,
            },
            sale: SaleConfig { price_decimals: 3 },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = Config {
            chain: ChainConfig {
                chain_id: env::var("CHAIN_ID")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()?,
                network_name: env::var("NETWORK_NAME")
                    .unwrap_or_else(|_| "Ethereum".to_string()),
            },
            tokens: TokenConfig {
                tx_refresh_interval_secs: env::var("TX_REFRESH_INTERVAL_SECS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()?,
            },
            sale: SaleConfig {
                price_decimals: env::var("PRICE_DECIMALS")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Wei has 18 decimals, so a price can't be kept more precisely than that.
    pub fn validate(&self) -> crate::Result<()> {
        if self.sale.price_decimals > 18 {
            return Err(crate::Error::Config(format!(
                "PRICE_DECIMALS must be at most 18, got {}",
                self.sale.price_decimals
            )));
        }
        Ok(())
    }
}
