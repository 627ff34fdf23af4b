/// Inspecting the validation errors a parse ran into
use wurl::Parser;

fn main() {
    let inputs = [
        "https://example.com/",
        "  https://user@pass@example.com\\a\\b  ",
        "http:example.com/%zz",
        "file://localhost/C|/Windows",
        "http://0x7f.1/",
        "http://[::1",
        "http://a:70000/",
    ];

    let mut parser = Parser::new();
    for input in inputs {
        parser.clear();
        match parser.parse(input, None) {
            Ok(url) => println!("{input:?} -> {url}"),
            Err(error) => println!("{input:?} -> error: {error}"),
        }
        for entry in parser.log() {
            println!("    at {:>2}: {}", entry.offset, entry.error);
        }
    }
}
