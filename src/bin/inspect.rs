use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urdu_philology::app::report::render_tokenization_report;
use urdu_philology::domain::services::corpus::Corpus;
use urdu_philology::domain::services::frequency::FrequencyAnalysis;
use urdu_philology::domain::services::repetition::repeated_phrases;
use urdu_philology::domain::services::themes::ThemeLexicon;
use urdu_philology::domain::services::tokenizer::DEFAULT_PUNCTUATION;
use urdu_philology::domain::services::unicode::code_points;
use urdu_philology::utils::logger;
use urdu_philology::{TextEncoding, TokenizeMode, Tokenizer, UnicodeVerifier};

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Quick look at a piece of Urdu text")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct TextInput {
    /// Text to inspect; omit to use --file
    text: Option<String>,

    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "utf-8")]
    encoding: TextEncoding,
}

impl TextInput {
    fn read(&self) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(self.encoding.decode(&bytes, true)?)
            }
            (None, None) => bail!("pass the text as an argument or use --file"),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// UTF-8 and Urdu character report
    Verify(TextInput),
    /// Token-by-token listing
    Tokenize {
        #[command(flatten)]
        input: TextInput,
        /// Drop punctuation instead of emitting it as tokens
        #[arg(long, conflicts_with = "whitespace")]
        strip: bool,
        /// Split on whitespace only
        #[arg(long)]
        whitespace: bool,
        #[arg(long, default_value = DEFAULT_PUNCTUATION)]
        punctuation: String,
    },
    /// Word frequencies, type-token ratio and thematic vocabulary
    Analyze {
        #[command(flatten)]
        input: TextInput,
        #[arg(long, default_value = "5")]
        top_n: usize,
    },
    /// Two-word phrases that occur more than once
    Repetition(TextInput),
    /// Group cleaned lines into couplets
    Couplets(TextInput),
    /// Unicode scalar value of every character
    Codepoints(TextInput),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Verify(input) => {
            let text = input.read()?;
            let verifier = UnicodeVerifier::new();
            println!("{}", verifier.render_report(&verifier.verify(&text)));
        }
        Command::Tokenize {
            input,
            strip,
            whitespace,
            punctuation,
        } => {
            let text = input.read()?;
            let tokenizer = Tokenizer::new(&punctuation)?;
            let mode = if strip {
                TokenizeMode::StripPunctuation
            } else if whitespace {
                TokenizeMode::Whitespace
            } else {
                TokenizeMode::KeepPunctuation
            };
            let tokens = tokenizer.tokenize(&text, mode);
            println!("{}", render_tokenization_report(&text, &tokens, &tokenizer, 5));
        }
        Command::Analyze { input, top_n } => {
            let text = input.read()?;
            let tokenizer = Tokenizer::urdu()?;
            let tokens = tokenizer.tokenize(&text, TokenizeMode::StripPunctuation);
            let analysis = FrequencyAnalysis::from_tokens(&tokens);

            println!("Total words: {}", analysis.total_words);
            println!("Unique words: {}", analysis.unique_words);
            println!("Type-Token Ratio: {:.3}", analysis.type_token_ratio);
            println!();
            println!("Most frequent words (top {}):", top_n);
            for entry in analysis.most_common(top_n) {
                println!("  '{}': {}x", entry.word, entry.count);
            }

            let significant = ThemeLexicon::default().interpret(&analysis.frequencies);
            if !significant.is_empty() {
                println!();
                println!("{:<10} {:<12} Literary Significance", "Word", "Frequency");
                println!("{}", "-".repeat(70));
                for item in significant {
                    println!("{:<10} {:<12} {}", item.word, item.count, item.interpretation);
                }
            }
        }
        Command::Repetition(input) => {
            let text = input.read()?;
            let phrases = repeated_phrases(&text);
            if phrases.is_empty() {
                println!("No significant phrase repetition detected.");
            }
            for phrase in phrases {
                println!("\"{}\": {} times", phrase.phrase, phrase.count);
            }
        }
        Command::Couplets(input) => {
            let corpus = Corpus::from_content(&input.read()?);
            for (i, couplet) in corpus.couplets().iter().enumerate() {
                println!("Sher {}:", i + 1);
                println!("  {}", couplet.first);
                if let Some(second) = &couplet.second {
                    println!("  {}", second);
                }
            }
            let stats = corpus.stats();
            println!();
            println!(
                "Lines: {}, words: {}, unique: {}, avg line length: {:.1}",
                stats.total_lines, stats.total_words, stats.unique_words, stats.avg_line_length
            );
        }
        Command::Codepoints(input) => {
            for (c, code) in code_points(&input.read()?) {
                println!("  '{}': {} (Decimal: {})", c, code, c as u32);
            }
        }
    }

    Ok(())
}
