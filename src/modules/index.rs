//! Per-invocation module lookup index.
//!
//! Built once from the host's live module list for a file, replacing ad hoc
//! pattern probing with keyed lookups. The index makes each matching rule
//! independently testable and keeps the diff engines free of id-string
//! knowledge.

use rustc_hash::FxHashMap;

use super::ModuleRef;
use super::query::BlockQuery;

/// A block-level style module plus the flag that changes its invalidation
/// policy: inline styles are embedded in the entry module's output, so
/// updating one also means reloading the entry.
#[derive(Debug, Clone, Copy)]
pub struct StyleModule<'a> {
    pub module: &'a ModuleRef,
    pub inline: bool,
}

/// Keyed lookups over one live module list.
#[derive(Debug)]
pub struct ModuleIndex<'a> {
    main: Option<&'a ModuleRef>,
    template: Option<&'a ModuleRef>,
    /// lang -> script module.
    scripts: FxHashMap<String, &'a ModuleRef>,
    /// (index, lang) -> non-direct style module.
    styles: FxHashMap<(usize, String), StyleModule<'a>>,
    /// (custom block type, index) -> module.
    customs: FxHashMap<(String, usize), &'a ModuleRef>,
}

impl<'a> ModuleIndex<'a> {
    /// Index a live module list. First match wins for every keyed slot,
    /// mirroring the host graph's own find semantics.
    pub fn build(modules: &'a [ModuleRef]) -> Self {
        let mut main: Option<&ModuleRef> = None;
        let mut template = None;
        let mut scripts = FxHashMap::default();
        let mut styles = FxHashMap::default();
        let mut customs = FxHashMap::default();

        for module in modules {
            let query = BlockQuery::parse(&module.id);

            // Entry selection: shortest id = fewest query markers. Strict
            // less-than keeps the first module on ties (stable pick).
            if query.is_entry_candidate()
                && main.is_none_or(|best: &ModuleRef| module.id.len() < best.id.len())
            {
                main = Some(module);
            }

            match query.block_type.as_deref() {
                Some("template") => {
                    if template.is_none() {
                        template = Some(module);
                    }
                }
                Some("script") => {
                    if let Some(lang) = query.lang {
                        scripts.entry(lang).or_insert(module);
                    }
                }
                Some("style") => {
                    if query.direct {
                        continue;
                    }
                    if let (Some(index), Some(lang)) = (query.index, query.lang) {
                        styles.entry((index, lang)).or_insert(StyleModule {
                            module,
                            inline: query.inline,
                        });
                    }
                }
                Some(custom) => {
                    if let Some(index) = query.index {
                        customs.entry((custom.to_string(), index)).or_insert(module);
                    }
                }
                None => {}
            }
        }

        Self {
            main,
            template,
            scripts,
            styles,
            customs,
        }
    }

    /// The file's entry module, when one is live.
    #[inline]
    pub fn main(&self) -> Option<&'a ModuleRef> {
        self.main
    }

    /// The template module, when one is live.
    #[inline]
    pub fn template(&self) -> Option<&'a ModuleRef> {
        self.template
    }

    /// The dedicated script module for an explicit language tag.
    #[inline]
    pub fn script(&self, lang: &str) -> Option<&'a ModuleRef> {
        self.scripts.get(lang).copied()
    }

    /// The addressable (non-direct) style module for `(index, lang)`.
    #[inline]
    pub fn style(&self, index: usize, lang: &str) -> Option<StyleModule<'a>> {
        self.styles.get(&(index, lang.to_string())).copied()
    }

    /// The module for a custom block `(type, index)` pair.
    #[inline]
    pub fn custom(&self, block_type: &str, index: usize) -> Option<&'a ModuleRef> {
        self.customs
            .get(&(block_type.to_string(), index))
            .copied()
    }
}
