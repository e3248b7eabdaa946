use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::IngestSettings;
use crate::domain::Match;
use crate::errors::{read_context, record_context};
use crate::services::records::{Record, RecordReader};

const RECORD_FIELDS: usize = 5;
const GAME_FIELD: usize = 1;
const WINNER_FIELD: usize = 2;
const LOSER_FIELD: usize = 3;
const VALID_FIELD: usize = 4;

/// Why a well-formed record was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    OtherGame,
    NotValid,
    MultiParticipant,
    MissingParticipant,
}

/// Counts of what happened to each record
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub kept: usize,
    pub other_game: usize,
    pub not_valid: usize,
    pub multi_participant: usize,
    pub missing_participant: usize,
}

impl IngestSummary {
    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::OtherGame => self.other_game += 1,
            SkipReason::NotValid => self.not_valid += 1,
            SkipReason::MultiParticipant => self.multi_participant += 1,
            SkipReason::MissingParticipant => self.missing_participant += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.other_game + self.not_valid + self.multi_participant + self.missing_participant
    }
}

/// Reads tab separated match records:
/// `id, game, winner, loser, valid`
pub struct IngestionService<'a> {
    settings: &'a IngestSettings,
}

impl<'a> IngestionService<'a> {
    pub fn new(settings: &'a IngestSettings) -> Self {
        Self { settings }
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Match>> {
        info!("Reading matches from {}", path.display());

        let contents = fs::read_to_string(path).with_context(|| read_context(path))?;
        let (matches, summary) = self.parse(&contents)?;

        info!(
            "  → Kept {} {} matches, skipped {}",
            summary.kept,
            self.settings.game,
            summary.skipped()
        );
        debug!("  → Skip breakdown: {:?}", summary);

        Ok(matches)
    }

    pub fn parse(&self, contents: &str) -> Result<(Vec<Match>, IngestSummary)> {
        let mut reader = RecordReader::new(contents, self.settings.delimiter);
        let mut matches = Vec::new();
        let mut summary = IngestSummary::default();

        while let Some(record) = reader.next_record()? {
            check_field_count(&record).with_context(|| record_context(record.line))?;

            match self.classify(&record.fields) {
                Ok(game) => {
                    summary.kept += 1;
                    matches.push(game);
                }
                Err(reason) => summary.record_skip(reason),
            }
        }

        Ok((matches, summary))
    }

    fn classify(&self, fields: &[String]) -> std::result::Result<Match, SkipReason> {
        let winner = fields[WINNER_FIELD].as_str();
        let loser = fields[LOSER_FIELD].as_str();

        if fields[GAME_FIELD] != self.settings.game {
            return Err(SkipReason::OtherGame);
        }
        if fields[VALID_FIELD] != self.settings.valid_marker {
            return Err(SkipReason::NotValid);
        }
        if self.is_multi_participant(winner) || self.is_multi_participant(loser) {
            return Err(SkipReason::MultiParticipant);
        }
        if winner.is_empty() || loser.is_empty() {
            return Err(SkipReason::MissingParticipant);
        }

        Ok(Match::new(winner, loser))
    }

    fn is_multi_participant(&self, side: &str) -> bool {
        side.contains(self.settings.participant_separator)
    }
}

fn check_field_count(record: &Record) -> Result<()> {
    if record.fields.len() != RECORD_FIELDS {
        anyhow::bail!(
            "expected {} fields, found {}",
            RECORD_FIELDS,
            record.fields.len()
        );
    }
    Ok(())
}
