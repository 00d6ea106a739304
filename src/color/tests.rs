#![cfg(test)]

use super::*;

#[test]
fn test_escape_table() {
    assert_eq!(escape(Style::Regular, Color::Black), "\x1b[0;30m");
    assert_eq!(escape(Style::Bold, Color::Green), "\x1b[1;32m");
    assert_eq!(escape(Style::Underline, Color::Purple), "\x1b[4;35m");
    assert_eq!(escape(Style::Background, Color::White), "\x1b[47m");
    assert_eq!(Color::Cyan.code(), 36);
}

#[test]
fn test_painters() {
    assert_eq!(red("This text is red."), "\x1b[0;31mThis text is red.\x1b[0m");
    assert_eq!(yellow_bold("x"), "\x1b[1;33mx\x1b[0m");
    assert_eq!(blue_underline("x"), "\x1b[4;34mx\x1b[0m");
    assert_eq!(cyan_bg("x"), "\x1b[46mx\x1b[0m");
    assert_eq!(black(""), "\x1b[0;30m\x1b[0m");

    let named: [fn(&str) -> String; 8] = [black, red, green, yellow, blue, purple, cyan, white];
    for (color, painter) in Color::ALL.into_iter().zip(named) {
        assert_eq!(painter("t"), paint(Style::Regular, color, "t"));
    }
}

#[test]
fn test_every_combination_resets() {
    for style in Style::ALL {
        for color in Color::ALL {
            let painted = paint(style, color, "text");
            assert!(painted.starts_with(&escape(style, color)));
            assert!(painted.ends_with(RESET), "{style:?} {color:?} should end with a reset.");
            assert_eq!(Painted::new(style, color, "text").to_string(), painted);
            assert_eq!(painted.contains(';'), !style.is_background());
        }
    }
}
