// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, HeadArgs, ListArgs, RegisterArgs, SiblingArgs, SuffixArgs};
use crate::config::Config;
use crate::output::{
    CheckReport, FamilyReport, HeadReport, OutputFormatter, RegisterEntry, SiblingReport, SuffixReport,
};
use crate::register::{suffix, Register, RegisterCatalog};

pub struct CommandHandler {
    config: Config,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Merges the optional config file with command line overrides.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        if let Some(level) = &args.log_level {
            config = config.with_log_level(level.clone());
        }
        if let Some(format) = args.output_format() {
            config = config.with_output_format(format);
        }
        if args.no_color {
            config = config.with_color(false);
        }
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self::with_config(config))
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging();

        let output = self.dispatch(args.command)?;
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }

    fn setup_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.config.level_filter())
            .format_timestamp(None)
            .try_init()
            .ok();

        if !self.config.use_color {
            colored::control::set_override(false);
        }

        // Force the tables to be checked before any query runs.
        let catalog = RegisterCatalog::global();
        log::info!("Loaded {} register families", catalog.families().len());
    }

    pub fn dispatch(&self, command: Command) -> anyhow::Result<String> {
        match command {
            Command::List(list_args) => self.handle_list(list_args),
            Command::Family(family_args) => self.handle_family(family_args),
            Command::Sibling(sibling_args) => self.handle_sibling(sibling_args),
            Command::Suffix(suffix_args) => self.handle_suffix(suffix_args),
            Command::Head(head_args) => self.handle_head(head_args),
            Command::Check => self.handle_check(),
        }
    }

    fn formatter(&self) -> OutputFormatter {
        OutputFormatter::new(self.config.output_format).with_color(self.config.use_color)
    }

    fn handle_list(&self, args: ListArgs) -> anyhow::Result<String> {
        let entries: Vec<RegisterEntry> = RegisterCatalog::global()
            .registers()
            .filter(|r| args.arch.map_or(true, |arch| r.is_available_in(arch)))
            .filter(|r| args.class.map_or(true, |class| class.matches(*r)))
            .filter(|r| args.width.map_or(true, |width| r.width() == width))
            .map(RegisterEntry::new)
            .collect();
        log::debug!("Listing {} registers", entries.len());
        self.formatter().render(&entries)
    }

    fn handle_family(&self, args: RegisterArgs) -> anyhow::Result<String> {
        let family = RegisterCatalog::global().try_family(args.register)?;
        self.formatter().render(&FamilyReport {
            register: args.register,
            family,
        })
    }

    fn handle_sibling(&self, args: SiblingArgs) -> anyhow::Result<String> {
        let sibling = RegisterCatalog::global().sibling(args.register, args.width);
        if sibling.is_none() {
            log::debug!("{} has no {} sibling", args.register, args.width);
        }
        self.formatter().render(&SiblingReport {
            register: args.register,
            width: args.width,
            sibling,
        })
    }

    fn handle_suffix(&self, args: SuffixArgs) -> anyhow::Result<String> {
        self.formatter().render(&SuffixReport {
            width: args.width,
            suffix: suffix(args.width),
        })
    }

    fn handle_head(&self, args: HeadArgs) -> anyhow::Result<String> {
        let arch = args.arch.unwrap_or(self.config.architecture);
        let register: Register = args.register;
        let head = RegisterCatalog::global().try_family(register)?.head(arch);
        self.formatter().render(&HeadReport {
            register,
            architecture: arch,
            head,
        })
    }

    fn handle_check(&self) -> anyhow::Result<String> {
        let report = CheckReport::run();
        if let Some(e) = &report.error {
            log::error!("Register tables failed verification: {}", e);
            anyhow::bail!("Register tables failed verification: {}", e);
        }
        self.formatter().render(&report)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::Parser;

    fn run(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let handler = CommandHandler::from_args(&args).unwrap();
        handler.dispatch(args.command).unwrap()
    }

    #[test]
    fn test_sibling_command() {
        assert_eq!(run(&["regcat", "--no-color", "sibling", "bx", "long"]), "bx @ long -> ebx\n");
        assert_eq!(run(&["regcat", "--no-color", "sibling", "di", "b"]), "di @ byte -> none\n");
    }

    #[test]
    fn test_family_command() {
        assert_eq!(run(&["regcat", "--no-color", "family", "r10w"]), "r10 (alias): r10b r10w r10d r10\n");
    }

    #[test]
    fn test_head_defaults_to_config_architecture() {
        assert_eq!(run(&["regcat", "--no-color", "head", "bl"]), "head of bl on x86_64 -> rbx\n");
        assert_eq!(
            run(&["regcat", "--no-color", "head", "bl", "--arch", "x86_16"]),
            "head of bl on x86_16 -> bx\n"
        );
    }

    #[test]
    fn test_list_filters() {
        let out = run(&["regcat", "--no-color", "list", "--arch", "x86_32", "--class", "simd"]);
        assert_eq!(out.lines().count(), 1 + 8);
        assert!(!out.contains("xmm8"));
    }

    #[test]
    fn test_suffix_json() {
        let out = run(&["regcat", "--json-output", "suffix", "quad"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["suffix"], "q");
    }

    #[test]
    fn test_check_command() {
        assert_eq!(run(&["regcat", "--no-color", "check"]), "[+] 83 registers in 18 families\n");
    }

    #[test]
    fn test_from_args_overrides() {
        let args = Args::try_parse_from(["regcat", "--json-output", "--no-color", "-l", "debug", "check"]).unwrap();
        let handler = CommandHandler::from_args(&args).unwrap();
        assert_eq!(handler.config().output_format, OutputFormat::Json);
        assert!(!handler.config().use_color);
        assert_eq!(handler.config().level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_from_args_rejects_bad_level() {
        let args = Args::try_parse_from(["regcat", "-l", "noisy", "check"]).unwrap();
        assert!(CommandHandler::from_args(&args).is_err());
    }
}
