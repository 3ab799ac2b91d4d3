//! # Interactive Session
//!
//! The menu loop is a sequential state machine: the main menu dispatches to
//! one flow, the flow runs its prompts to completion, and control returns
//! to the menu. Only the Exit option (or the input stream closing) leaves
//! the loop; validation and domain errors are displayed and fall back to
//! the menu.
//!
//! The session is generic over its reader and writer so entire
//! conversations can be scripted against byte buffers in tests, the same
//! way the store trait lets the service run against an in-memory backend.

use crate::error::Result;
use crate::render::product_table;
use crate::service::ProductService;
use crate::store::ProductStore;
use crate::validate::{self, RawPatch};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Main menu actions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Where control goes after a flow finishes. Exit also covers the input
/// stream closing mid-flow.
enum Flow {
    Menu,
    Exit,
}

/// Update sub-prompts run in this fixed order.
#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Category,
    Quantity,
    Price,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Name, Field::Category, Field::Quantity, Field::Price];

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Category => "Categoria",
            Field::Quantity => "Quantidade",
            Field::Price => "Preço",
        }
    }

    fn set(self, raw: &mut RawPatch, value: String) {
        match self {
            Field::Name => raw.name = Some(value),
            Field::Category => raw.category = Some(value),
            Field::Quantity => raw.quantity = Some(value),
            Field::Price => raw.price = Some(value),
        }
    }
}

pub struct Session<S: ProductStore, R: BufRead, W: Write> {
    service: ProductService<S>,
    input: R,
    output: W,
}

impl<S, R, W> Session<S, R, W>
where
    S: ProductStore,
    R: BufRead,
    W: Write,
{
    pub fn new(service: ProductService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or until the input stream closes.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(option) = self.prompt("Escolha uma opção: ")? else {
                return Ok(());
            };
            let flow = match MenuChoice::from_input(&option) {
                Some(MenuChoice::Add) => self.add_product()?,
                Some(MenuChoice::List) => self.list_products()?,
                Some(MenuChoice::Update) => self.update_product()?,
                Some(MenuChoice::Delete) => self.delete_product()?,
                Some(MenuChoice::Search) => self.search_product()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    self.error("Opção inválida. Tente novamente.")?;
                    Flow::Menu
                }
            };
            if matches!(flow, Flow::Exit) {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Gerenciamento de Produtos - AgilStore ===")?;
        writeln!(self.output, "1. Adicionar Produto")?;
        writeln!(self.output, "2. Listar Produtos")?;
        writeln!(self.output, "3. Atualizar Produto")?;
        writeln!(self.output, "4. Excluir Produto")?;
        writeln!(self.output, "5. Buscar Produto")?;
        writeln!(self.output, "6. Sair")?;
        Ok(())
    }

    fn add_product(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Nome do Produto: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            self.error("Nome é obrigatório.")?;
            return Ok(Flow::Menu);
        }

        let Some(category) = self.choose_category()? else {
            return Ok(Flow::Exit);
        };

        let Some(quantity) = self.prompt("Quantidade em Estoque: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.prompt("Preço (ex: 2999.99): ")? else {
            return Ok(Flow::Exit);
        };

        match validate::parse_new(&name, &category, &quantity, &price) {
            Ok(fields) => match self.service.add_product(fields) {
                Ok(_) => self.success("Produto adicionado com sucesso!")?,
                Err(e) => self.error(&format!("Erro: {}", e))?,
            },
            Err(messages) => {
                self.error("Erro de validação:")?;
                for message in &messages {
                    self.error(&format!("→ {}", message))?;
                }
            }
        }
        Ok(Flow::Menu)
    }

    /// Category picker: choose one of the existing categories by number, or
    /// the last option to create a new one. Invalid selections re-display
    /// the same prompt. Returns `None` when the input stream closes.
    fn choose_category(&mut self) -> Result<Option<String>> {
        let categories = self.service.categories()?;

        writeln!(self.output, "\nCategorias existentes no sistema:")?;
        if categories.is_empty() {
            writeln!(self.output, "→ Ainda não existem categorias cadastradas.")?;
        } else {
            for (i, category) in categories.iter().enumerate() {
                writeln!(self.output, "[{}] {}", i + 1, category)?;
            }
        }
        writeln!(
            self.output,
            "[{}] Criar uma nova categoria",
            categories.len() + 1
        )?;

        loop {
            let Some(choice) = self.prompt("\nEscolha a categoria (digite o número): ")? else {
                return Ok(None);
            };
            match choice.parse::<usize>() {
                Ok(n) if (1..=categories.len()).contains(&n) => {
                    return Ok(Some(categories[n - 1].clone()));
                }
                Ok(n) if n == categories.len() + 1 => return self.ask_new_category(),
                Ok(_) => self.error("Opção inválida.")?,
                Err(_) => self.error("Por favor, digite um número.")?,
            }
        }
    }

    /// Forced non-empty loop: re-prompts until a name is given.
    fn ask_new_category(&mut self) -> Result<Option<String>> {
        loop {
            let Some(name) = self.prompt("Digite o nome da NOVA categoria: ")? else {
                return Ok(None);
            };
            if !name.is_empty() {
                return Ok(Some(name));
            }
            self.error("Nome da categoria não pode ser vazio.")?;
        }
    }

    fn list_products(&mut self) -> Result<Flow> {
        match self.service.list_products() {
            Ok(products) if products.is_empty() => {
                writeln!(self.output, "Nenhum produto cadastrado.")?;
            }
            Ok(products) => write!(self.output, "{}", product_table(&products))?,
            Err(e) => self.error(&format!("Erro ao listar: {}", e))?,
        }
        Ok(Flow::Menu)
    }

    fn update_product(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id()? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Menu);
        };

        let mut raw = RawPatch::default();
        for field in Field::ORDER {
            let Some(answer) = self.prompt(&format!("Atualizar {}? (y/n): ", field.label()))?
            else {
                return Ok(Flow::Exit);
            };
            if answer.eq_ignore_ascii_case("y") {
                let Some(value) = self.prompt(&format!("Novo {}: ", field.label()))? else {
                    return Ok(Flow::Exit);
                };
                field.set(&mut raw, value);
            }
        }

        if raw.is_empty() {
            writeln!(self.output, "Nenhuma atualização realizada.")?;
            return Ok(Flow::Menu);
        }

        match validate::parse_patch(&raw) {
            Ok(patch) => match self.service.update_product(id, &patch) {
                Ok(_) => self.success("Produto atualizado com sucesso!")?,
                Err(e) => self.error(&format!("Erro: {}", e))?,
            },
            Err(messages) => {
                self.error("Erro de validação:")?;
                for message in &messages {
                    self.error(&format!("- {}", message))?;
                }
            }
        }
        Ok(Flow::Menu)
    }

    fn delete_product(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id()? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Menu);
        };

        let Some(answer) = self.prompt("Confirmar exclusão? (y/n): ")? else {
            return Ok(Flow::Exit);
        };
        if answer.eq_ignore_ascii_case("y") {
            match self.service.delete_product(id) {
                Ok(()) => self.success("Produto excluído com sucesso!")?,
                Err(e) => self.error(&format!("Erro: {}", e))?,
            }
        }
        Ok(Flow::Menu)
    }

    fn search_product(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("ID ou Nome (parcial): ")? else {
            return Ok(Flow::Exit);
        };
        if query.is_empty() {
            self.error("Query de busca é obrigatória.")?;
            return Ok(Flow::Menu);
        }

        match self.service.search_products(&query) {
            Ok(results) if results.is_empty() => {
                writeln!(self.output, "Nenhum produto encontrado.")?;
            }
            Ok(results) => write!(self.output, "{}", product_table(&results))?,
            Err(e) => self.error(&format!("Erro: {}", e))?,
        }
        Ok(Flow::Menu)
    }

    /// Outer `None` means the input stream closed; inner `None` means the id
    /// failed validation (already reported, back to the menu).
    fn prompt_id(&mut self) -> Result<Option<Option<u64>>> {
        let Some(raw) = self.prompt("ID do Produto: ")? else {
            return Ok(None);
        };
        match validate::parse_id(&raw) {
            Ok(id) => Ok(Some(Some(id))),
            Err(message) => {
                self.error("Erro de validação no ID:")?;
                self.error(&format!("- {}", message))?;
                Ok(Some(None))
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.green())?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}
