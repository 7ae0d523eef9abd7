// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Single-owner task in front of the [`FeeTracker`]
//!
//! HTTP handlers never touch the tracker directly. They send a [`Command`]
//! through a [`FeeTrackerHandle`] and await the oneshot reply. Each fee lookup
//! runs on its own task, so a slow upstream call never delays cache hits or
//! stats for other requests. Duplicate lookups of one hash are collapsed inside
//! the tracker.

use alloy_primitives::TxHash;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info};

use crate::cache::CacheStats;
use crate::errors::FeeTrackerError;
use crate::tracker::FeeTracker;
use crate::types::fees::TransactionFeeRecord;
use crate::types::hash::parse_transaction_hash;

type Responder<T> = oneshot::Sender<Result<T, FeeTrackerError>>;

const COMMAND_BUFFER: usize = 64;

pub struct CommandHandler {
    tracker: Arc<FeeTracker>,
}

impl CommandHandler {
    /// Spawns the handler task and returns a `FeeTrackerHandle` to it.
    pub fn init(tracker: FeeTracker) -> FeeTrackerHandle {
        let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

        let job = CommandHandler {
            tracker: Arc::new(tracker),
        };

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Command::TransactionFee(cmd) => {
                        let tracker = Arc::clone(&job.tracker);
                        tokio::spawn(async move {
                            let result = tracker.resolve(cmd.tx_hash).await;
                            if cmd.responder.send(result).is_err() {
                                error!(tx_hash = %cmd.tx_hash, "Failed to send transaction fee response");
                            }
                        });
                    }
                    Command::CacheStats(cmd) => {
                        let stats = job.tracker.cache_stats().await;
                        if cmd.responder.send(Ok(stats)).is_err() {
                            error!("Failed to send cache stats response");
                        }
                    }
                }
            }
            info!("Command channel closed, fee tracker stopped");
        });

        FeeTrackerHandle { tx }
    }
}

#[derive(Clone)]
pub struct FeeTrackerHandle {
    pub tx: mpsc::Sender<Command>,
}

impl FeeTrackerHandle {
    /// Validate `raw_hash` and resolve its fee on a handler task
    pub async fn transaction_fee(
        &self,
        raw_hash: &str,
    ) -> Result<TransactionFeeRecord, FeeTrackerError> {
        let tx_hash = parse_transaction_hash(raw_hash)?;
        let (responder, rx) = oneshot::channel();
        self.send(Command::TransactionFee(TransactionFeeCommand { tx_hash, responder }))
            .await?;
        Self::receive(rx).await
    }

    /// Current cache statistics from the handler task
    pub async fn cache_stats(&self) -> Result<CacheStats, FeeTrackerError> {
        let (responder, rx) = oneshot::channel();
        self.send(Command::CacheStats(CacheStatsCommand { responder }))
            .await?;
        Self::receive(rx).await
    }

    async fn send(&self, command: Command) -> Result<(), FeeTrackerError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| FeeTrackerError::unavailable("Failed to send command"))
    }

    async fn receive<T>(
        rx: oneshot::Receiver<Result<T, FeeTrackerError>>,
    ) -> Result<T, FeeTrackerError> {
        rx.await
            .map_err(|_| FeeTrackerError::unavailable("Failed to receive response"))?
    }
}

/// Commands for the fee tracker `CommandHandler`
pub enum Command {
    TransactionFee(TransactionFeeCommand),
    CacheStats(CacheStatsCommand),
}

pub struct TransactionFeeCommand {
    pub tx_hash: TxHash,
    pub responder: Responder<TransactionFeeRecord>,
}

pub struct CacheStatsCommand {
    pub responder: Responder<CacheStats>,
}
