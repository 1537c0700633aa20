use std::path::PathBuf;

use clap::Parser;
use lazydialog::SizeUnits;

#[derive(Parser, Debug)]
#[command(name = "lazydialog", version, about = "Modal dialog playground for the terminal")]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Theme name (e.g., "Catppuccin Latte")
    #[arg(short, long)]
    pub theme: Option<String>,

    /// How dialogs are sized: "percent" or "columns"
    #[arg(long)]
    pub size_units: Option<SizeUnits>,

    /// Label for OK buttons
    #[arg(long)]
    pub ok_label: Option<String>,

    /// Label for Cancel buttons
    #[arg(long)]
    pub cancel_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "lazydialog",
            "--size-units",
            "columns",
            "--ok-label",
            "Yes",
            "-t",
            "Catppuccin Latte",
        ]);
        assert_eq!(args.size_units, Some(SizeUnits::Columns));
        assert_eq!(args.ok_label.as_deref(), Some("Yes"));
        assert_eq!(args.theme.as_deref(), Some("Catppuccin Latte"));
        assert!(args.config.is_none());
    }
}
