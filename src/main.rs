use utility_lib::collections::flag_value;
use utility_lib::color::{self, Color, Style};
use utility_lib::format::Show;
use utility_lib::process;
use utility_lib::string::{string_break, to_lowercase};

fn main() {
    let args = process::args();

    match flag_value("--break", &args) {
        Some(line) => println!("{}", string_break(&line).show()),
        None => swatches(),
    }
}

fn swatches() {
    for style in Style::ALL {
        for color in Color::ALL {
            let label = to_lowercase(&format!("This text is {color:?} {style:?}."));
            println!("{}", color::paint(style, color, &label));
        }
    }
}
