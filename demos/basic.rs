use wurl::Url;

fn main() {
    let url = Url::parse("HTTPS://User@Example.COM:443/a/./b/../c?query=value#hash", None)
        .expect("Failed to parse URL");

    println!("URL: {}", url.href()); // https://User@example.com/a/c?query=value#hash
    println!("Protocol: {}", url.protocol()); // https:
    println!("Username: {}", url.username()); // User
    println!("Host: {}", url.host()); // example.com
    println!("Port: {:?}", url.port_number()); // None, 443 is the default
    println!("Pathname: {}", url.pathname()); // /a/c
    println!("Search: {}", url.search()); // ?query=value
    println!("Hash: {}", url.hash()); // #hash
    println!("Origin: {}", url.origin()); // https://example.com
    println!();

    // Relative references resolve against the parsed URL
    let next = url.join("../d?page=2").expect("Failed to join");
    println!("Joined: {next}"); // https://User@example.com/d?page=2
    println!();

    // Setters normalize their input the same way parsing does
    let mut edited = next.clone();
    edited.set_host("\u{65e5}\u{672c}.jp:8443");
    edited.set_pathname("/\u{30d1}\u{30b9}");
    edited.set_hash("top");
    println!("Edited: {edited}"); // https://User@xn--wgv71a.jp:8443/%E3%83%91%E3%82%B9?page=2#top
}
