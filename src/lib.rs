//! AVL Dictionary
//!
//! A word dictionary backed by a self-balancing AVL binary search tree.
//!
//! # Quick Start
//!
//! ```rust
//! use avl_dictionary::core::BalancedTree;
//!
//! let mut tree = BalancedTree::new();
//! for key in [30, 20, 10] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.root().map(|node| *node.key()), Some(20));
//! assert!(tree.delete(&20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```
//!
//! ```rust
//! use avl_dictionary::dictionary::{AddOutcome, Dictionary};
//!
//! let (mut dict, _) = Dictionary::from_words(["cat", "bat", "cut"]);
//! assert_eq!(dict.add("cat"), AddOutcome::AlreadyPresent);
//! assert_eq!(dict.find_similar("cat"), vec!["bat", "cut"]);
//! ```

// Tree core: nodes, ordered tree, AVL tree
pub mod core;

// Word store over the AVL tree
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
