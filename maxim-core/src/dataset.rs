//! Dataset loading and validation.
//!
//! The dataset is built once at process start from a builtin static table
//! of seed entries and is immutable afterwards. `load()` is the production
//! entry point; `from_seeds()` is the validating constructor underneath it
//! and accepts arbitrary seed tables.

use crate::error::QuoteError;
use crate::quote::Quote;

/// A raw seed entry for the dataset loader.
///
/// `author_profile` is optional and defaults to the empty string; `author`
/// and `message` are required and must be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct QuoteSeed {
    /// Name of the quoted person.
    pub author: &'static str,
    /// Optional biographical note.
    pub author_profile: Option<&'static str>,
    /// The quotation text.
    pub message: &'static str,
}

/// Builtin quote table: life maxims from great thinkers.
const BUILTIN: &[QuoteSeed] = &[
    QuoteSeed {
        author: "소크라테스",
        author_profile: Some("고대 그리스 철학자"),
        message: "성찰하지 않는 삶은 살 가치가 없다.",
    },
    QuoteSeed {
        author: "소크라테스",
        author_profile: Some("고대 그리스 철학자"),
        message: "너 자신을 알라.",
    },
    QuoteSeed {
        author: "플라톤",
        author_profile: Some("고대 그리스 철학자, 아카데미아 설립자"),
        message: "시작은 일의 가장 중요한 부분이다.",
    },
    QuoteSeed {
        author: "아리스토텔레스",
        author_profile: Some("고대 그리스 철학자, 플라톤의 제자"),
        message: "우리는 반복적으로 행하는 것의 결과물이다. 탁월함은 행동이 아니라 습관이다.",
    },
    QuoteSeed {
        author: "공자",
        author_profile: Some("중국 춘추시대 사상가, 유교의 시조"),
        message: "멈추지 않는 한, 얼마나 천천히 가는지는 중요하지 않다.",
    },
    QuoteSeed {
        author: "공자",
        author_profile: Some("중국 춘추시대 사상가, 유교의 시조"),
        message: "아는 것을 안다 하고 모르는 것을 모른다 하는 것, 그것이 아는 것이다.",
    },
    QuoteSeed {
        author: "노자",
        author_profile: Some("중국 고대 사상가, 도가의 시조"),
        message: "천 리 길도 한 걸음부터 시작된다.",
    },
    QuoteSeed {
        author: "세네카",
        author_profile: Some("고대 로마 스토아 철학자"),
        message: "인생은 짧은 것이 아니라 우리가 짧게 만드는 것이다.",
    },
    QuoteSeed {
        author: "마르쿠스 아우렐리우스",
        author_profile: Some("로마 제국 황제, 스토아 철학자"),
        message: "삶의 행복은 생각의 질에 달려 있다.",
    },
    QuoteSeed {
        author: "데카르트",
        author_profile: Some("프랑스 철학자, 근대 철학의 아버지"),
        message: "나는 생각한다, 고로 존재한다.",
    },
    QuoteSeed {
        author: "칸트",
        author_profile: Some("독일 계몽주의 철학자"),
        message: "할 수 있다고 믿기에 할 수 있는 것이다.",
    },
    QuoteSeed {
        author: "니체",
        author_profile: Some("독일 철학자"),
        message: "살아야 할 이유를 아는 사람은 거의 모든 상태를 견딜 수 있다.",
    },
    QuoteSeed {
        author: "니체",
        author_profile: Some("독일 철학자"),
        message: "나를 죽이지 못하는 것은 나를 더 강하게 만든다.",
    },
    QuoteSeed {
        author: "파스칼",
        author_profile: Some("프랑스 수학자, 철학자"),
        message: "인간은 생각하는 갈대이다.",
    },
];

/// The immutable, ordered quote dataset.
///
/// Order is the seed-table order and is a stable, observable part of the
/// service contract, not an implementation accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    quotes: Vec<Quote>,
}

impl Dataset {
    /// Loads the builtin dataset.
    ///
    /// Validates every seed entry and rejects an empty result, so a
    /// successfully loaded dataset always satisfies the non-empty
    /// invariant random selection depends on.
    pub fn load() -> Result<Self, QuoteError> {
        let dataset = Self::from_seeds(BUILTIN)?;
        if dataset.is_empty() {
            return Err(QuoteError::EmptyDataset);
        }
        Ok(dataset)
    }

    /// Builds a dataset from an arbitrary seed table.
    ///
    /// Each entry must have a non-empty author and message; a missing
    /// profile defaults to the empty string. An empty table is accepted
    /// here (only `load()` enforces non-emptiness).
    pub fn from_seeds(seeds: &[QuoteSeed]) -> Result<Self, QuoteError> {
        let mut quotes = Vec::with_capacity(seeds.len());
        for (index, seed) in seeds.iter().enumerate() {
            if seed.author.is_empty() {
                return Err(QuoteError::Validation {
                    index,
                    reason: "author is empty".to_string(),
                });
            }
            if seed.message.is_empty() {
                return Err(QuoteError::Validation {
                    index,
                    reason: "message is empty".to_string(),
                });
            }
            quotes.push(Quote {
                author: seed.author.to_string(),
                author_profile: seed.author_profile.unwrap_or("").to_string(),
                message: seed.message.to_string(),
            });
        }
        Ok(Self { quotes })
    }

    /// Returns all quotes in load order.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Returns the number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the dataset has no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
