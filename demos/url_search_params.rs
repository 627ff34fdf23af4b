/// `UrlSearchParams` usage example
use wurl::{Url, UrlSearchParams};

fn main() {
    // Parse a query string
    let mut params = UrlSearchParams::parse("?name=Jane+Doe&age=30&tag=a&tag=b");

    println!("name: {:?}", params.get("name")); // Some("Jane Doe")
    println!("tags: {:?}", params.get_all("tag")); // ["a", "b"]
    println!();

    params.append("city", "S\u{e3}o Paulo");
    println!("After append: {params}"); // name=Jane+Doe&age=30&tag=a&tag=b&city=S%C3%A3o+Paulo

    // Set keeps the first position and drops the other pairs with that name
    params.set("tag", "c");
    println!("After set: {params}"); // name=Jane+Doe&age=30&tag=c&city=S%C3%A3o+Paulo

    params.delete("age", None);
    println!("After delete: {params}"); // name=Jane+Doe&tag=c&city=S%C3%A3o+Paulo

    params.sort();
    println!("After sort: {params}"); // city=S%C3%A3o+Paulo&name=Jane+Doe&tag=c
    println!();

    println!("All parameters:");
    for (key, value) in params.iter() {
        println!("  {key} = {value}");
    }
    println!();

    // Write the list back into a URL
    let mut url = Url::parse("https://example.com/search#results", None).expect("Failed to parse URL");
    url.set_search_params(&params);
    println!("URL: {url}"); // https://example.com/search?city=S%C3%A3o+Paulo&name=Jane+Doe&tag=c#results
}
