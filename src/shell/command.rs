use clap::{Parser, Subcommand};

/// One line typed into the menu shell
#[derive(Parser, Debug)]
#[command(
    name = "menu",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// Every course with its item count, average price and items
    Home,
    /// Add a menu item: add <course> <price> <name...>
    Add {
        /// Starter, Main or Dessert
        course: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Remove a menu item by id
    Remove { id: u64 },
    /// Filter by course and search names: filter [course] [search...]
    Filter {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },
    /// Show a single item card
    Card { id: u64 },
    /// List every item with its id
    List,
    /// Show available commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellLine {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_joins_name_words() {
        let line = ShellLine::parse_line("add Main 120.00 Rib Eye Steak").unwrap();

        assert_eq!(
            line.command,
            ShellCommand::Add {
                course: "Main".to_string(),
                price: "120.00".to_string(),
                name: vec!["Rib".to_string(), "Eye".to_string(), "Steak".to_string()],
            }
        );
    }

    #[test]
    fn test_negative_price_reaches_validation() {
        let line = ShellLine::parse_line("add Main -5 Steak").unwrap();

        assert!(matches!(line.command, ShellCommand::Add { price, .. } if price == "-5"));
    }

    #[test]
    fn test_exit_alias() {
        let line = ShellLine::parse_line("exit").unwrap();

        assert_eq!(line.command, ShellCommand::Quit);
    }

    #[test]
    fn test_remove_requires_numeric_id() {
        assert!(ShellLine::parse_line("remove steak").is_err());
        assert!(ShellLine::parse_line("unknown").is_err());
    }
}
