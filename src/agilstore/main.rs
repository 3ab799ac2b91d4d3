use agilstore::error::Result;
use agilstore::service::ProductService;
use agilstore::session::Session;
use agilstore::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use std::io;

/// Gerenciamento de produtos AgilStore no terminal.
///
/// No flags: all interaction happens through the menu on stdin.
#[derive(Parser, Debug)]
#[command(name = "agilstore")]
#[command(about = "Gerenciador interativo de inventário da AgilStore", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = run() {
        eprintln!("{}", format!("Erro: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = FileStore::new("data");
    // Best-effort: a failure here is reported but does not stop the session;
    // the store falls back to empty reads until a write succeeds.
    if let Err(e) = store.prepare() {
        eprintln!("Erro ao preparar o diretório de dados: {}", e);
    }

    let service = ProductService::new(store);
    let stdin = io::stdin();
    let mut session = Session::new(service, stdin.lock(), io::stdout());
    session.run()
}
