use colored::Colorize;
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::config::{StockpileConfig, KEYS};
use stockpile::index::DisplayFolder;
use stockpile::model::ProductHit;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const ICON_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_folders(folders: &[DisplayFolder]) {
    if folders.is_empty() {
        println!("No folders found. Run `stockpile init` to create the defaults.");
        return;
    }

    for df in folders {
        let idx = format!("{:>3}. ", df.index);
        let name = pad_to_width(&truncate_to_width(&df.folder.name, NAME_WIDTH), NAME_WIDTH);
        let icon = pad_to_width(df.folder.icon.symbol(), ICON_WIDTH);
        let kind = df.folder.kind().to_string();
        let kind = if df.folder.is_stock {
            kind.cyan()
        } else {
            kind.magenta()
        };

        println!("{}{}{}{}", idx.yellow(), name, icon.dimmed(), kind);
    }
}

pub(super) fn print_product(hit: &ProductHit) {
    println!("{}", hit.item_name.bold());
    if let Some(url) = &hit.image_url {
        println!("  image: {}", url.dimmed());
    }
    match &hit.image {
        Some(bytes) => println!("  {} bytes downloaded", bytes.len()),
        None => println!("  {}", "no image data".dimmed()),
    }
}

pub(super) fn print_config(config: &StockpileConfig) {
    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let shown = if value.is_empty() {
            "(unset)".dimmed().to_string()
        } else {
            value
        };
        println!("{} = {}", key, shown);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
