//! # Markup Rewriting Module
//!
//! Questo modulo riscrive il root element del markup ottimizzato.
//!
//! ## Responsabilità:
//! - Sostituisce il root `<svg>` con un elemento fresco che porta SOLO
//!   la tabella canonica di attributi, in ordine fisso
//! - Calcola la classe CSS derivata dall'icon name (`bi bi-<name>`)
//! - Preserva ordine e contenuto di tutti i nodi figli (path, shapes, testo)
//! - Normalizza i line endings a singolo `\n`
//!
//! ## Invarianti:
//! - Dopo la riscrittura il root ha esattamente gli attributi della tabella,
//!   qualsiasi attributo preesistente (incluso quanto aggiunto
//!   dall'ottimizzatore) viene scartato
//! - La trasformazione è idempotente: attributi e classe dipendono solo dal
//!   nome file e dalla tabella configurata, mai dallo stato precedente

use crate::{config::RootAttributes, error::NormalizeError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Rewrites the root element of optimized SVG markup
pub struct MarkupRewriter;

impl MarkupRewriter {
    /// CSS class assigned to an icon, derived from its file name
    pub fn icon_class(icon_name: &str) -> String {
        format!("bi bi-{}", icon_name)
    }

    /// Replace the root `<svg>` element with a fresh one carrying exactly
    /// the canonical attribute set, `class` resolved from the icon name.
    ///
    /// Child markup passes through untouched and in order. Nested `svg`
    /// elements are children like any other and are left alone.
    pub fn rewrite_root(
        markup: &str,
        attrs: &RootAttributes,
        icon_name: &str,
    ) -> Result<String, NormalizeError> {
        let mut reader = Reader::from_str(markup);
        let mut writer = Writer::new(Vec::new());

        let class = Self::icon_class(icon_name);
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    if depth == 0 && !saw_root && e.local_name().as_ref() == b"svg" {
                        writer.write_event(Event::Start(Self::fresh_root(attrs, &class)))?;
                        saw_root = true;
                    } else {
                        writer.write_event(Event::Start(e))?;
                    }
                    depth += 1;
                }
                Event::Empty(e) => {
                    if depth == 0 && !saw_root && e.local_name().as_ref() == b"svg" {
                        writer.write_event(Event::Empty(Self::fresh_root(attrs, &class)))?;
                        saw_root = true;
                    } else {
                        writer.write_event(Event::Empty(e))?;
                    }
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    writer.write_event(Event::End(e))?;
                }
                Event::Eof => break,
                event => writer.write_event(event)?,
            }
        }

        if !saw_root {
            return Err(NormalizeError::MissingRoot(icon_name.to_string()));
        }

        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Normalize all line endings to a single newline character
    pub fn normalize_newlines(text: &str) -> String {
        if !text.contains('\r') {
            return text.to_string();
        }
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Build the replacement root element with the canonical attribute set
    fn fresh_root<'a>(attrs: &'a RootAttributes, class: &'a str) -> BytesStart<'a> {
        let mut root = BytesStart::new("svg");
        for (name, value) in attrs.entries() {
            let value = if name == "class" { class } else { value };
            root.push_attribute((name, value));
        }
        root
    }
}
