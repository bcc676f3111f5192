//! Resolver contract: environment-style mapping in, `RoutingConfig` out.

use std::collections::HashMap;

use aether_connect::config::{ConfigResolver, keys};
use aether_connect::prelude::*;

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn gateway_pair() -> Vec<(&'static str, &'static str)> {
    vec![
        (keys::AETHER_API_KEY, "gk"),
        (keys::AETHER_PROXY_ENDPOINT, "https://gw.example"),
    ]
}

#[test]
fn presence_of_the_gateway_pair_selects_enterprise() {
    let mut pairs = gateway_pair();
    pairs.push((keys::AZURE_PROVIDER_MODEL, "gpt-4o-mini"));
    let config = ConfigResolver::from_map(vars(&pairs))
        .resolve(ProviderKind::AzureOpenAi)
        .unwrap();

    assert_eq!(config.mode, RoutingMode::Enterprise);
    assert_eq!(config.gateway_endpoint.as_deref(), Some("https://gw.example"));
    assert_eq!(config.model, "gpt-4o-mini");
}

#[test]
fn half_a_gateway_pair_is_direct_mode() {
    let config = ConfigResolver::from_map(vars(&[
        (keys::AETHER_API_KEY, "gk"),
        (keys::GOOGLE_API_KEY, "pk"),
        (keys::GOOGLE_PROVIDER_MODEL, "gemini-1.5-flash"),
    ]))
    .resolve(ProviderKind::Gemini)
    .unwrap();

    assert_eq!(config.mode, RoutingMode::Direct);
}

#[test]
fn direct_mode_without_vendor_credentials_fails() {
    let err = ConfigResolver::from_map(vars(&[(keys::GOOGLE_PROVIDER_MODEL, "gemini-1.5-flash")]))
        .resolve(ProviderKind::Gemini)
        .unwrap_err();

    assert!(matches!(err, AetherError::ConfigurationError(_)));
    assert!(err.to_string().contains(keys::GOOGLE_API_KEY));
}

#[test]
fn missing_model_is_a_configuration_error_even_in_enterprise_mode() {
    let err = ConfigResolver::from_map(vars(&gateway_pair()))
        .resolve(ProviderKind::Gemini)
        .unwrap_err();

    assert!(matches!(err, AetherError::ConfigurationError(_)));
    assert!(err.to_string().contains(keys::GOOGLE_PROVIDER_MODEL));
}

#[test]
fn resolution_is_deterministic_for_the_same_mapping() {
    let mut pairs = gateway_pair();
    pairs.push((keys::AZURE_PROVIDER_MODEL, "gpt-4o-mini"));
    let resolver = ConfigResolver::from_map(vars(&pairs));

    let first = resolver.resolve(ProviderKind::AzureOpenAi).unwrap();
    let second = resolver.resolve(ProviderKind::AzureOpenAi).unwrap();
    assert_eq!(first.mode, second.mode);
    assert_eq!(first.model, second.model);
    assert_eq!(first.gateway_api_key, second.gateway_api_key);
}

#[test]
fn forced_direct_mode_overrides_the_presence_rule() {
    let mut pairs = gateway_pair();
    pairs.push((keys::GOOGLE_API_KEY, "pk"));
    pairs.push((keys::GOOGLE_PROVIDER_MODEL, "gemini-1.5-flash"));

    let config = ConfigResolver::from_map(vars(&pairs))
        .with_mode(RoutingMode::Direct)
        .resolve(ProviderKind::Gemini)
        .unwrap();

    assert_eq!(config.mode, RoutingMode::Direct);
    // Resolution of the direct config ignores the gateway values entirely.
    let params = resolve(&config, ProviderKind::Gemini).unwrap();
    assert_eq!(params.api_key, "pk");
}

#[test]
fn forced_enterprise_mode_without_gateway_values_fails_loudly() {
    let err = ConfigResolver::from_map(vars(&[
        (keys::GOOGLE_API_KEY, "pk"),
        (keys::GOOGLE_PROVIDER_MODEL, "gemini-1.5-flash"),
    ]))
    .with_mode(RoutingMode::Enterprise)
    .resolve(ProviderKind::Gemini)
    .unwrap_err();

    assert!(matches!(err, AetherError::ConfigurationError(_)));
}
