// src/error.rs
//! 山札操作、テーブル操作、設定読み込みのエラー型。
//!
//! 山札とテーブルのエラーは「変更を始める前に」検出されるので、エラーが返った時点で状態は何も変わってないよ。

use std::fmt;

use crate::components::card::CardId;

/// 山札 (`Pile`) の操作で起きるエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileError {
    /// 目印のカードがこの山札に無い
    NotFound(CardId),
    /// 入れようとしたカードが既にこの山札にある
    AlreadyPresent(CardId),
}

/// テーブル (`Table`) の操作で起きるエラー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// y 座標から計算した山札の番号が範囲外
    IndexOutOfRange { index: i64, count: usize },
    /// 山札操作のエラー
    Pile(PileError),
    /// どの山札にも無いカードがある
    MissingCard(CardId),
    /// 2か所以上に存在するカードがある
    DuplicateCard(CardId),
}

/// テーブル設定 (`TableConfig`) を読み込む時のエラー。
#[derive(Debug)]
pub enum ConfigError {
    /// JSON として読めなかった
    Parse(serde_json::Error),
    /// 読めたけど、値がおかしい
    Invalid { field: &'static str, reason: String },
}

// ===== Display implementations =====

impl fmt::Display for PileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileError::NotFound(card) => write!(f, "card not found in pile: {}", card),
            PileError::AlreadyPresent(card) => write!(f, "card already in pile: {}", card),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::IndexOutOfRange { index, count } => {
                write!(f, "pile index {} out of range (pile count {})", index, count)
            }
            TableError::Pile(e) => write!(f, "Pile error: {}", e),
            TableError::MissingCard(card) => write!(f, "card missing from every pile: {}", card),
            TableError::DuplicateCard(card) => write!(f, "card present in more than one place: {}", card),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config is not valid JSON: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "invalid config field '{}': {}", field, reason),
        }
    }
}

impl std::error::Error for PileError {}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Pile(e) => Some(e),
            _ => None,
        }
    }
}

// ===== From implementations =====

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<PileError> for TableError {
    fn from(e: PileError) -> Self {
        TableError::Pile(e)
    }
}
