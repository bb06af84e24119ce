use super::print::{print_config, print_folders, print_messages, print_product};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use stockpile::api::{ConfigAction, FolderUpdate, StockpileApi};
use stockpile::editor::FolderDraft;
use stockpile::error::{Result, StockpileError};
use stockpile::model::{FolderIcon, FolderKind};
use stockpile::store::fs::FileStore;
use tracing::debug;

const HOME_ENV: &str = "STOCKPILE_HOME";

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let mut api = init_context()?;

    match cli.command {
        Some(Commands::Init) => handle_init(&mut api),
        Some(Commands::List { kind }) => handle_list(&api, kind),
        Some(Commands::Create { name, icon, kind }) => handle_create(&mut api, name, icon, kind),
        Some(Commands::Edit {
            folder,
            name,
            icon,
            kind,
        }) => handle_edit(&mut api, folder, FolderUpdate { name, icon, kind }),
        Some(Commands::Delete { folder }) => handle_delete(&mut api, folder),
        Some(Commands::Lookup { code, save_image }) => handle_lookup(&api, code, save_image),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockpile", "stockpile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockpileError::Config("Could not determine a data directory".into()))
}

fn init_context() -> Result<StockpileApi<FileStore>> {
    let data_dir = data_dir()?;
    debug!(path = %data_dir.display(), "using data directory");
    let store = FileStore::new(data_dir.clone());
    Ok(StockpileApi::new(store, data_dir))
}

fn handle_init(api: &mut StockpileApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &StockpileApi<FileStore>, kind: Option<FolderKind>) -> Result<()> {
    let result = api.list_folders(kind)?;
    print_folders(&result.listed_folders);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(
    api: &mut StockpileApi<FileStore>,
    name: String,
    icon: FolderIcon,
    kind: FolderKind,
) -> Result<()> {
    let draft = FolderDraft {
        name,
        icon,
        is_stock: kind.is_stock(),
    };
    let result = api.create_folder(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut StockpileApi<FileStore>,
    folder: String,
    update: FolderUpdate,
) -> Result<()> {
    let result = api.update_folder(&folder, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut StockpileApi<FileStore>, folder: String) -> Result<()> {
    let result = api.delete_folder(&folder)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_lookup(
    api: &StockpileApi<FileStore>,
    code: String,
    save_image: Option<PathBuf>,
) -> Result<()> {
    let result = api.lookup(&code)?;
    print_messages(&result.messages);

    if let Some(hit) = &result.product {
        print_product(hit);
        if let (Some(path), Some(bytes)) = (save_image, &hit.image) {
            std::fs::write(&path, bytes).map_err(StockpileError::Io)?;
            println!("Image written to {}", path.display());
        }
    }
    Ok(())
}

fn handle_config(
    api: &StockpileApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
