#[cfg(test)]
pub mod tests {
    use crate::settings::Settings;

    pub fn crate_test_settings_str() -> String {
        r#"
            [bidder]
            endpoint = "https://test-rtb.example.com/prebid"
            currency = "USD"
            ttl_secs = 200
            test_mode = false

            [sync]
            iframe_url = "https://test-sync.example.com/iframe"
            "#
        .to_string()
    }

    pub fn create_test_settings() -> Settings {
        let toml_str = crate_test_settings_str();
        Settings::from_toml(&toml_str).expect("Invalid config")
    }
}
