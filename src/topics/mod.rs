//! Secret-word topics.
//!
//! The engine does not ship topic content. Callers implement
//! [`TopicProvider`] or hand a list to [`TopicList`].

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// One round of secret words.
///
/// Innocents see `real_word`, the imposter sees `fake_word`; `prompt` is
/// public guidance for the discussion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topic {
    pub real_word: String,
    pub fake_word: String,
    pub prompt: String,
}

impl Topic {
    pub fn new(
        real_word: impl Into<String>,
        fake_word: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            real_word: real_word.into(),
            fake_word: fake_word.into(),
            prompt: prompt.into(),
        }
    }

    /// The word a player should see.
    #[must_use]
    pub fn word_for(&self, is_imposter: bool) -> &str {
        if is_imposter {
            &self.fake_word
        } else {
            &self.real_word
        }
    }
}

/// Source of topics, pulled once per session.
pub trait TopicProvider {
    fn next_topic(&mut self, rng: &mut GameRng) -> Topic;
}

/// A fixed topic; every session uses it.
impl TopicProvider for Topic {
    fn next_topic(&mut self, _rng: &mut GameRng) -> Topic {
        self.clone()
    }
}

impl<T: TopicProvider + ?Sized> TopicProvider for Box<T> {
    fn next_topic(&mut self, rng: &mut GameRng) -> Topic {
        (**self).next_topic(rng)
    }
}

/// Uniform pick from a caller-supplied, non-empty list.
#[derive(Clone, Debug)]
pub struct TopicList {
    topics: Vec<Topic>,
}

impl TopicList {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(topics: Vec<Topic>) -> Option<Self> {
        if topics.is_empty() {
            None
        } else {
            Some(Self { topics })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl TopicProvider for TopicList {
    fn next_topic(&mut self, rng: &mut GameRng) -> Topic {
        self.topics[rng.gen_index(self.topics.len())].clone()
    }
}
