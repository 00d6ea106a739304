#![cfg(test)]

use std::collections::{BTreeSet, HashSet};

use super::*;

#[test]
fn test_format() {
    assert_eq!(format("hello {} and {}!", &[&"Alice", &"Bob"]), "hello Alice and Bob!");
    assert_eq!(format("hello {}", &[&42]), "hello 42");
    assert_eq!(format("no placeholders", &[&1, &2]), "no placeholders");
    assert_eq!(format("{} {} {}", &[&1]), "1 {} {}", "Unfilled placeholders stay literal.");
    assert_eq!(format("{}", &[]), "{}");
    assert_eq!(format("{}{}", &[&"{}", &"x"]), "x{}", "Substituted text is searched again.");
    assert_eq!(format("pi is {}", &[&3.5]), "pi is 3.5");
}

#[test]
fn test_format_with() {
    assert_eq!(crate::format_with!("{} + {} = {}", 1, 2, 1 + 2), "1 + 2 = 3");
    assert_eq!(crate::format_with!("{}-{}", "a", String::from("b"),), "a-b");
    assert_eq!(crate::format_with!("plain"), "plain");
}

#[test]
fn test_debug_passthrough() {
    assert_eq!(debug(5) * 2, 10);
    assert_eq!(debug("text"), "text");
}

#[test]
fn test_show_containers() {
    assert_eq!(Some(4).show().to_string(), "Some(4)");
    assert_eq!(None::<i32>.show().to_string(), "None");

    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err(String::from("bad"));
    assert_eq!(ok.show().to_string(), "Ok(1)");
    assert_eq!(err.show().to_string(), "Err(bad)");

    assert_eq!(vec![1, 2, 3].show().to_string(), "Vec { 1, 2, 3 }");
    assert_eq!([7_u8][..].show().to_string(), "Vec { 7 }");
    assert_eq!(Vec::<u8>::new().show().to_string(), "Vec {  }");

    let set: BTreeSet<&str> = ["b", "a", "c"].into();
    assert_eq!(set.show().to_string(), "Set { a, b, c }");
    let set: HashSet<&str> = ["only"].into();
    assert_eq!(set.show().to_string(), "Set { only }");
    assert_eq!(BTreeSet::<u8>::new().show().to_string(), "Set {  }");
}
