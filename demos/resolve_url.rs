use std::sync::Arc;

use upstream_proxy::keys;
use upstream_proxy::prelude::*;

fn main() {
    let prefs = Arc::new(MemoryPreferences::new());
    prefs.set_bool(keys::USE_HTTP_PROXY, true);
    prefs.set_bool(keys::USE_CUSTOM_PROXY_SETTINGS, true);
    prefs.set_string(keys::CUSTOM_PROXY_HOST, "proxy.example.com");
    prefs.set_string(keys::CUSTOM_PROXY_PORT, "3128");
    prefs.set_bool(keys::USE_PROXY_AUTHENTICATION, true);
    prefs.set_string(keys::PROXY_USERNAME, "demo user");
    prefs.set_string(keys::PROXY_PASSWORD, "demo pass");
    prefs.set_string(keys::PROXY_DOMAIN, "CORP");

    let resolver = ProxyResolver::from_store(prefs);

    // Snapshot the system proxy before anything in this process could
    // mutate the proxy properties.
    resolver.save_system_proxy_settings();

    match resolver.validated_proxy_settings() {
        Ok(Some(settings)) => println!("resolved proxy: {settings}"),
        Ok(None) => println!("no proxy selected"),
        Err(error) => println!(
            "unusable proxy selection: {error} (code={})",
            error.code().as_str()
        ),
    }

    println!("upstream proxy url: {}", resolver.upstream_proxy_url());
    println!(
        "original system proxy: {:?}",
        resolver.original_system_proxy_settings()
    );
}
