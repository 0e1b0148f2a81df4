use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use std::path::Path;

pub const IMAGE_CAPTION: &str = "Traffic Enforcement in India";

pub struct HomeLogic;

impl HomeLogic {
    pub fn banner() -> String {
        format!(
            "{}\n{}\n",
            Colour::Red.bold().paint("Welcome to SecureCheck Traffic Records"),
            Colour::Green.paint("police  traffic recording details")
        )
    }

    pub fn show(image: &str) {
        println!("{}", Self::banner());

        if Path::new(image).exists() {
            info(format!("Image: {} ({})", image, IMAGE_CAPTION));
        } else {
            warning(format!("Image not found: {} ({})", image, IMAGE_CAPTION));
        }

        println!("---");
        println!("This application provides a comprehensive overview of traffic stop records.");
        println!("Navigate through the commands to explore different aspects of the data,");
        println!("including detailed tables, analytics, and custom queries:\n");
        println!("  securecheck records   Traffic records table, metrics and charts");
        println!("  securecheck entry     Data entry record format and stop narrative");
        println!("  securecheck query     Predefined analytical queries");
    }
}
