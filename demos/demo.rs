use std::borrow::Cow;

use tidystr::{JoinStrings, StrTidy, ensure_has_value};

fn main() {
    let raw = "  Here  is\r\n\r\nsome  String ";
    let tidy = raw.remove_redundant_whitespace();
    println!("raw:  {raw:?}");
    println!("tidy: {tidy:?}");

    let already = "no extra whitespace here";
    match already.remove_redundant_whitespace() {
        Cow::Borrowed(_) => println!("{already:?} was returned without copying"),
        Cow::Owned(_) => println!("{already:?} was rebuilt"),
    }

    let fields = ["alpha", "", "  ", "beta", "gamma"];
    println!("joined: {}", fields.join_non_empty(", "));

    match ensure_has_value("   ", "comment") {
        Ok(value) => println!("accepted: {value:?}"),
        Err(err) => println!("rejected: {err}"),
    }
}
