//! User-Visible Strings
//!
//! Every text the page shows, per locale.

use std::fmt;

/// Operation a user-visible failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Add,
    Toggle,
    Edit,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Toggle => "toggle",
            Operation::Edit => "edit",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    /// Map a BCP 47 tag such as `pt-BR` or `en-US`
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("pt") {
            Locale::PtBr
        } else {
            Locale::En
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub add_placeholder: &'static str,
    pub add_label: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub save: &'static str,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
    pub config_error: &'static str,
    load_failed: &'static str,
    add_failed: &'static str,
    toggle_failed: &'static str,
    edit_failed: &'static str,
    delete_failed: &'static str,
}

impl Messages {
    /// Prefix shown before the remote error message
    pub fn error_prefix(&self, op: Operation) -> &'static str {
        match op {
            Operation::Load => self.load_failed,
            Operation::Add => self.add_failed,
            Operation::Toggle => self.toggle_failed,
            Operation::Edit => self.edit_failed,
            Operation::Delete => self.delete_failed,
        }
    }
}

static PT_BR: Messages = Messages {
    title: "Lista de Mercado",
    add_placeholder: "Adicionar novo item...",
    add_label: "Adicionar",
    loading: "Carregando...",
    empty: "Nenhum item na lista. Adicione algo!",
    save: "Salvar",
    edit_label: "Editar",
    delete_label: "Excluir",
    config_error: "Configuração inválida: ",
    load_failed: "Erro ao carregar itens: ",
    add_failed: "Erro ao adicionar item: ",
    toggle_failed: "Erro ao atualizar item: ",
    edit_failed: "Erro ao editar item: ",
    delete_failed: "Erro ao excluir item: ",
};

static EN: Messages = Messages {
    title: "Shopping List",
    add_placeholder: "Add a new item...",
    add_label: "Add",
    loading: "Loading...",
    empty: "No items in the list. Add something!",
    save: "Save",
    edit_label: "Edit",
    delete_label: "Delete",
    config_error: "Invalid configuration: ",
    load_failed: "Failed to load items: ",
    add_failed: "Failed to add item: ",
    toggle_failed: "Failed to update item: ",
    edit_failed: "Failed to edit item: ",
    delete_failed: "Failed to delete item: ",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_language_tag() {
        assert_eq!(Locale::from_language_tag("pt-BR"), Locale::PtBr);
        assert_eq!(Locale::from_language_tag("PT"), Locale::PtBr);
        assert_eq!(Locale::from_language_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_language_tag(""), Locale::En);
    }

    #[test]
    fn test_error_prefixes() {
        let pt = Locale::PtBr.messages();
        assert_eq!(pt.error_prefix(Operation::Add), "Erro ao adicionar item: ");
        assert_eq!(pt.error_prefix(Operation::Load), "Erro ao carregar itens: ");
        assert_eq!(Locale::En.messages().error_prefix(Operation::Delete), "Failed to delete item: ");
    }
}
