use code_translator::{
    Config, DictionaryTranslator, LocalizationProvider, TranslationProvider, TranslationRecord,
    UiTranslationManager, code_actions,
};
use code_translator::extract::detect_framework;
use code_translator::localization::translation_hints;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

const DEFAULT_CONFIG_FILE: &str = "code-translator.toml";

type CliResult<T> = Result<T, Box<dyn Error>>;

fn cli() -> Command {
    Command::new("code-translator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find, translate and extract non-English UI strings in source code")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a TOML configuration file (default: ./code-translator.toml)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log lookups, cache hits and skipped strings")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("lookup")
                .about("Translate a single word or phrase")
                .arg(Arg::new("text").help("Text to translate").required(true).index(1))
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Target language code (default: from config)"),
                )
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Source language code")
                        .default_value("auto"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract and translate UI strings from one file")
                .arg(Arg::new("file").help("Source file to analyze").required(true).index(1))
                .arg(
                    Arg::new("target")
                        .long("target")
                        .short('t')
                        .help("Target language code (default: from config)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print translations, hints and code actions as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Scan a workspace and write locales/<language>.json files")
                .arg(Arg::new("workspace").help("Workspace root").required(true).index(1))
                .arg(
                    Arg::new("import")
                        .long("import")
                        .help("Seed the store from a previously exported JSON file"),
                )
                .arg(
                    Arg::new("export")
                        .long("export")
                        .help("Write all stored translations to this JSON file"),
                ),
        )
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> CliResult<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| format!("missing argument <{}>", name).into())
}

fn load_config(matches: &ArgMatches) -> CliResult<Config> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(Path::new(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };
    Ok(config)
}

fn print_record(record: &TranslationRecord) {
    println!(
        "{:<40} {:<12} \"{}\" → \"{}\" ({}%)",
        record.key,
        record.context.element_type.as_str(),
        record.original_text,
        record.translated_text,
        (record.confidence * 100.0).round()
    );
}

async fn run_lookup(config: &Config, matches: &ArgMatches) -> CliResult<()> {
    let text = required(matches, "text")?;
    let source = required(matches, "source")?;
    let target = matches
        .get_one::<String>("target")
        .unwrap_or(&config.general.target_language);

    let mut provider = TranslationProvider::dictionary();
    match provider.translate(text, target, source).await {
        Some(result) if result.confidence >= config.general.min_confidence => {
            println!("{}", result.translated_text);
            info!(
                source = %result.source_language,
                target = %result.target_language,
                confidence = result.confidence_percent(),
                "lookup succeeded"
            );
        }
        Some(result) => {
            eprintln!(
                "No confident translation for \"{}\" ({}%)",
                text,
                result.confidence_percent()
            );
        }
        None => eprintln!("Translation lookup failed for \"{}\"", text),
    }
    Ok(())
}

async fn run_extract(config: &Config, matches: &ArgMatches) -> CliResult<()> {
    let file = required(matches, "file")?;
    let target = matches
        .get_one::<String>("target")
        .unwrap_or(&config.ui.target_language);
    let content = fs::read_to_string(file).map_err(|e| format!("{}: {}", file, e))?;

    let provider = TranslationProvider::with_capacity(
        Box::new(DictionaryTranslator::new()),
        config.ui.lookup_cache_capacity,
    );
    let mut manager =
        UiTranslationManager::new(provider).with_min_confidence(config.ui.min_confidence);

    let framework = detect_framework(file, &content);
    debug!(file = %file, framework = %framework, "detected framework");
    let terms = manager.extract_ui_terms_for(&content, file, framework);
    let translated = manager.translate_ui_terms(&terms, target).await;
    let hints = translation_hints(&content, &translated, config.ui.hint_confidence);

    if matches.get_flag("json") {
        let output = serde_json::json!({
            "translations": translated,
            "hints": hints,
            "actions": code_actions(&hints, file),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} UI strings found, {} translated", terms.len(), translated.len());
    for record in &translated {
        print_record(record);
    }
    for hint in &hints {
        println!("{}:{}:{}: {}", file, hint.range.line + 1, hint.range.column + 1, hint.message);
    }
    Ok(())
}

async fn run_generate(config: &Config, matches: &ArgMatches) -> CliResult<()> {
    let workspace = PathBuf::from(required(matches, "workspace")?);
    let mut provider = LocalizationProvider::from_config(config.ui.clone());

    if let Some(import) = matches.get_one::<String>("import") {
        let json = fs::read_to_string(import).map_err(|e| format!("{}: {}", import, e))?;
        let count = provider.manager_mut().import_translations(&json)?;
        println!("Imported {} translations from {}", count, import);
    }

    let report = provider.generate_localization_files(&workspace).await?;
    println!(
        "Scanned {} files, {} translations in {} languages",
        report.files_scanned,
        report.translations,
        report.languages.len()
    );
    for path in &report.written {
        println!("  wrote {}", path.display());
    }

    if let Some(export) = matches.get_one::<String>("export") {
        let json = provider.manager().export_translations()?;
        fs::write(export, json).map_err(|e| format!("{}: {}", export, e))?;
        println!("Exported {} translations to {}", provider.manager().store().len(), export);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("lookup", sub)) => run_lookup(&config, sub).await,
        Some(("extract", sub)) => run_extract(&config, sub).await,
        Some(("generate", sub)) => run_generate(&config, sub).await,
        _ => unreachable!("subcommand_required is set"),
    }
}
