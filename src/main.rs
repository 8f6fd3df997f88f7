use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use extractor_icons::config::Config;
use extractor_icons::generate::generate_icons;
use extractor_icons::icon::IconGeometry;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "extractor-icons")]
#[command(about = "Generate the DOM Extractor toolbar icons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every configured size and write the PNG files (default)
    Generate(GenerateArgs),
    /// Print the computed geometry for one icon size
    Geometry {
        /// Icon size in pixels
        size: u32,
    },
    /// Write the default configuration to a YAML file
    InitConfig {
        /// Where to write the settings file
        #[arg(default_value = "icons.yaml")]
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// YAML settings file. Built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory, overrides the settings file
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Icon size to generate (repeatable), overrides the settings file
    #[arg(short, long = "size")]
    sizes: Vec<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => generate_command(args),
        Some(Commands::Geometry { size }) => geometry_command(size),
        Some(Commands::InitConfig { path }) => init_config_command(&path),
        None => generate_command(GenerateArgs::default()),
    }
}

fn generate_command(args: GenerateArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(dir) = args.out_dir {
        config.output.dir = dir;
    }
    if !args.sizes.is_empty() {
        config.icons.sizes = args.sizes;
    }

    let written = generate_icons(&config)?;

    println!();
    println!("All icons generated! ({} files in {})", written.len(), config.output.dir.display());

    Ok(())
}

fn geometry_command(size: u32) -> Result<()> {
    let geometry = IconGeometry::for_size(size)?;

    println!("Icon {}x{}", geometry.size, geometry.size);
    println!("  composition:  {}", if geometry.is_simplified() { "simplified" } else { "full" });
    println!("  center:       {}", geometry.center);
    println!("  padding:      {}", geometry.padding);
    println!("  line width:   {}", geometry.line_width);
    println!("  radius:       {}", geometry.radius);
    println!("  dot radius:   {}", geometry.dot_radius);

    if let Some(brackets) = geometry.brackets {
        println!("  brackets:     length {}, width {}", brackets.length, brackets.width);
    }
    if let Some(crosshair) = geometry.crosshair {
        println!("  crosshair:    reach {}, gap {}", crosshair.reach, crosshair.gap);
    }

    Ok(())
}

fn init_config_command(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists, not overwriting", path.display());
    }

    Config::default().save(path)?;
    println!("Created default config at: {}", path.display());

    Ok(())
}
