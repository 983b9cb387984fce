//! Static site content: the philosophy catalog and the philosopher list.
//!
//! Both are built once at startup and shared read-only through
//! [`AppState`](crate::state::AppState). Nothing mutates them afterwards.

use std::collections::{HashMap, HashSet};
use std::path::Path;

/// A philosopher shown on the `/philosophers` page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilosopherEntry {
    /// Display name, also used verbatim as the URL segment.
    pub name: &'static str,
    /// Portrait path under the public asset directory.
    pub image_path: &'static str,
}

/// A single philosophy and its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Philosophy {
    pub name: &'static str,
    pub description: &'static str,
}

/// A named group of philosophies, listed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub philosophies: &'static [Philosophy],
}

/// Result of a successful catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhilosophyMatch {
    pub category: &'static str,
    pub philosophy: &'static Philosophy,
}

/// Catalog construction errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The same philosophy name appears twice, in one or two categories.
    #[error("philosophy {name:?} is listed under both {first:?} and {second:?}")]
    DuplicatePhilosophy {
        name: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// The philosophy catalog: category → philosophy → description.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    /// Build a catalog, rejecting any philosophy name listed more than once.
    pub fn new(categories: &'static [Category]) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&'static str, &'static str> = HashMap::new();
        for category in categories {
            for philosophy in category.philosophies {
                if let Some(first) = seen.insert(philosophy.name, category.name) {
                    return Err(CatalogError::DuplicatePhilosophy {
                        name: philosophy.name,
                        first,
                        second: category.name,
                    });
                }
            }
        }
        Ok(Self { categories })
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(CATEGORIES)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Case-sensitive lookup across all categories; the first category
    /// (in declaration order) containing `name` wins.
    pub fn find(&self, name: &str) -> Option<PhilosophyMatch> {
        self.categories.iter().find_map(|category| {
            category
                .philosophies
                .iter()
                .find(|p| p.name == name)
                .map(|philosophy| PhilosophyMatch {
                    category: category.name,
                    philosophy,
                })
        })
    }

    /// Total number of philosophies across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.philosophies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const fn philosopher(name: &'static str, image_path: &'static str) -> PhilosopherEntry {
    PhilosopherEntry { name, image_path }
}

/// Portrait paths whose image files exist under the public asset directory.
///
/// Checked once at startup; pages fall back to an initial for the rest.
#[derive(Debug, Clone, Default)]
pub struct Portraits {
    available: HashSet<&'static str>,
}

impl Portraits {
    /// Check every listed philosopher's portrait against `public_dir`.
    pub fn scan(public_dir: &Path) -> Self {
        let available = PHILOSOPHERS
            .iter()
            .map(|p| p.image_path)
            .filter(|path| public_dir.join(path.trim_start_matches('/')).is_file())
            .collect();
        Self { available }
    }

    /// The portrait path for `entry`, if its file exists.
    pub fn get(&self, entry: &PhilosopherEntry) -> Option<&'static str> {
        self.available.get(entry.image_path).copied()
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

/// Find a listed philosopher by exact name.
pub fn find_philosopher(name: &str) -> Option<&'static PhilosopherEntry> {
    PHILOSOPHERS.iter().find(|p| p.name == name)
}

/// The fixed, ordered philosopher list.
pub const PHILOSOPHERS: &[PhilosopherEntry] = &[
    philosopher("Socrates", "/phlimages/socrates.jpg"),
    philosopher("Marcus Aurelius", "/phlimages/marcus_aurelius.jpg"),
    philosopher("Aristotle", "/phlimages/aristotle.jpg"),
    philosopher("Epictetus", "/phlimages/epictetus.jpg"),
    philosopher("Epicurus", "/phlimages/epicurus.jpg"),
    philosopher("Thales of Miletus", "/phlimages/thales_of_miletus.jpg"),
    philosopher("Plato", "/phlimages/plato.jpg"),
    philosopher("Friedrich Nietzsche", "/phlimages/friedrich_nietzsche.jpg"),
    philosopher("Immanuel Kant", "/phlimages/immanuel_kant.jpg"),
    philosopher("John Locke", "/phlimages/john_locke.jpg"),
    philosopher("Thomas Hobbes", "/phlimages/thomas_hobbes.jpg"),
    philosopher("David Hume", "/phlimages/david_hume.jpg"),
    philosopher("Jean-Jacques Rousseau", "/phlimages/jeanjacques_rousseau.jpg"),
    philosopher("Confucius", "/phlimages/confucius.jpg"),
    philosopher("Laozi", "/phlimages/laozi_lao_tzu.jpg"),
    philosopher("Zhuangzi", "/phlimages/zhuangzi_chuang_tzu.jpg"),
    philosopher("Mencius", "/phlimages/mencius_mengzi.jpg"),
    philosopher("Rene Descartes", "/phlimages/rene_descartes.jpg"),
    philosopher("Baruch Spinoza", "/phlimages/baruch_spinoza.jpg"),
    philosopher("Voltaire", "/phlimages/voltaire.jpg"),
];

const CATEGORIES: &[Category] = &[
    Category {
        name: "Ancient Greek & Hellenistic",
        philosophies: &[
            Philosophy {
                name: "Stoicism",
                description: "Founded by Zeno of Citium, Stoicism teaches that virtue is the only true good and that we should focus on what is within our control, accepting the rest with equanimity.",
            },
            Philosophy {
                name: "Epicureanism",
                description: "Epicurus held that a tranquil life free from fear and bodily pain is the highest good, reached through modest pleasures, friendship and the study of nature.",
            },
            Philosophy {
                name: "Cynicism",
                description: "The Cynics, most famously Diogenes of Sinope, rejected wealth, power and convention in favour of a simple life lived in agreement with nature.",
            },
            Philosophy {
                name: "Platonism",
                description: "Plato argued that the changing world of the senses is a shadow of eternal, unchanging Forms, which can be grasped only through reason.",
            },
            Philosophy {
                name: "Aristotelianism",
                description: "Aristotle grounded knowledge in observation and logic, and placed the good life in eudaimonia: flourishing through the exercise of virtue.",
            },
            Philosophy {
                name: "Skepticism",
                description: "Pyrrho and his successors suspended judgement on questions that cannot be settled, seeking peace of mind by giving up dogmatic belief.",
            },
        ],
    },
    Category {
        name: "Eastern",
        philosophies: &[
            Philosophy {
                name: "Confucianism",
                description: "Confucius taught that social harmony grows from personal virtue, proper conduct in relationships, respect for tradition and lifelong learning.",
            },
            Philosophy {
                name: "Taoism",
                description: "Rooted in the Tao Te Ching and the Zhuangzi, Taoism urges living in harmony with the Tao, the natural way of things, through simplicity and effortless action.",
            },
            Philosophy {
                name: "Buddhism",
                description: "The Buddha taught that suffering arises from craving and can be ended by following the Noble Eightfold Path toward awakening.",
            },
            Philosophy {
                name: "Zen",
                description: "Zen emphasises direct insight into one's own nature through meditation and everyday practice rather than doctrine or scripture.",
            },
            Philosophy {
                name: "Legalism",
                description: "The Legalists of ancient China held that order depends on clear laws, strict enforcement and a strong state rather than on moral example.",
            },
        ],
    },
    Category {
        name: "Modern",
        philosophies: &[
            Philosophy {
                name: "Rationalism",
                description: "Descartes, Spinoza and Leibniz held that reason, not the senses, is the primary source of knowledge, and that some truths are known a priori.",
            },
            Philosophy {
                name: "Empiricism",
                description: "Locke, Berkeley and Hume argued that all knowledge begins with experience and that the mind starts as a blank slate.",
            },
            Philosophy {
                name: "Existentialism",
                description: "Existentialists such as Kierkegaard, Sartre and de Beauvoir hold that existence precedes essence: we create meaning through free choice and bear responsibility for it.",
            },
            Philosophy {
                name: "Utilitarianism",
                description: "Bentham and Mill judged actions by their consequences, holding that the right act is the one producing the greatest happiness for the greatest number.",
            },
            Philosophy {
                name: "Nihilism",
                description: "Nihilism denies that life has inherent meaning, value or purpose; Nietzsche diagnosed it as a crisis to be overcome through the revaluation of values.",
            },
            Philosophy {
                name: "Pragmatism",
                description: "Peirce, James and Dewey measured ideas by their practical consequences, treating truth as what works when put to the test of experience.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_no_duplicates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.categories().len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn philosopher_list_is_fixed() {
        assert_eq!(PHILOSOPHERS.len(), 20);
        assert_eq!(PHILOSOPHERS[0].name, "Socrates");
        assert_eq!(PHILOSOPHERS[19].name, "Voltaire");
    }

    #[test]
    fn find_returns_category_and_description() {
        let catalog = Catalog::builtin().unwrap();
        let found = catalog.find("Stoicism").unwrap();
        assert_eq!(found.category, "Ancient Greek & Hellenistic");
        assert!(found.philosophy.description.contains("Zeno of Citium"));
    }

    #[test]
    fn find_is_case_sensitive() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.find("stoicism").is_none());
        assert!(catalog.find("NotARealThing").is_none());
    }

    #[test]
    fn duplicate_across_categories_is_rejected() {
        static DUPES: &[Category] = &[
            Category {
                name: "A",
                philosophies: &[Philosophy {
                    name: "Stoicism",
                    description: "one",
                }],
            },
            Category {
                name: "B",
                philosophies: &[Philosophy {
                    name: "Stoicism",
                    description: "two",
                }],
            },
        ];
        let err = Catalog::new(DUPES).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicatePhilosophy {
                name: "Stoicism",
                first: "A",
                second: "B",
            }
        );
    }

    #[test]
    fn find_philosopher_is_exact() {
        assert!(find_philosopher("Plato").is_some());
        assert!(find_philosopher("plato").is_none());
        assert!(find_philosopher("Zeno").is_none());
    }

    #[test]
    fn portraits_only_include_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("phlimages")).unwrap();
        std::fs::write(dir.path().join("phlimages/plato.jpg"), b"jpeg").unwrap();

        let portraits = Portraits::scan(dir.path());
        assert_eq!(portraits.len(), 1);

        let plato = find_philosopher("Plato").unwrap();
        let kant = find_philosopher("Immanuel Kant").unwrap();
        assert_eq!(portraits.get(plato), Some("/phlimages/plato.jpg"));
        assert_eq!(portraits.get(kant), None);
    }

    #[test]
    fn portraits_in_missing_directory_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Portraits::scan(&dir.path().join("absent")).is_empty());
    }
}
