//! Name a color from an RGB value
//!
//! Small CLI for exercising the conversion and naming stages without a
//! camera: takes a hex color or three channel values and prints the
//! classified name together with the intermediate HSV/HSL values.

use colorguide::{ColorClassifier, ColorConverter};
use palette::Srgb;
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let rgb = match parse_color(&args[1..]) {
        Some(rgb) => rgb,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let converter = ColorConverter::new();
    let classifier = ColorClassifier::new();

    let hsv = converter.rgb_to_hsv(rgb);
    let hsl = converter.hsv_to_hsl(hsv);
    let name = classifier.classify(hsl);

    println!("Input:  {}", converter.srgb_to_hex(rgb));
    println!(
        "HSV:    ({:.1}, {:.3}, {:.3})",
        hsv.hue.into_positive_degrees(),
        hsv.saturation,
        hsv.value
    );
    println!(
        "HSL:    ({:.1}, {:.3}, {:.3})",
        hsl.hue.into_positive_degrees(),
        hsl.saturation,
        hsl.lightness
    );
    println!("Name:   {}", name);
}

fn parse_color(args: &[String]) -> Option<Srgb<u8>> {
    match args {
        [hex] => parse_hex(hex),
        [r, g, b] => Some(Srgb::new(
            r.parse::<u8>().ok()?,
            g.parse::<u8>().ok()?,
            b.parse::<u8>().ok()?,
        )),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Srgb<u8>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Srgb::new(r, g, b))
}

fn print_help(program: &str) {
    eprintln!("Usage: {} <#RRGGBB | R G B>", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#FF0000'", program);
    eprintln!("  {} 128 128 128", program);
}
