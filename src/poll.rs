// This file is part of the terraform-provider-akamai project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded status polling.
//!
//! One loop shape shared by every asynchronous Akamai operation the
//! provider has to wait out: fetch the remote status at a fixed
//! interval until a predicate reports it terminal, the deadline
//! elapses, or a fetch fails. No backoff, no jitter.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep, timeout};

#[derive(Error, Debug)]
pub enum WaitError<E: std::error::Error> {
    #[error("deadline of {0:?} elapsed before the remote status settled")]
    Deadline(Duration),

    #[error(transparent)]
    Fetch(E),
}

/// Poll `fetch` every `interval` until `ready` accepts its result.
///
/// The first fetch happens immediately. A fetch error aborts the wait
/// and is reported as-is; the deadline covers the whole wait including
/// in-flight fetches.
pub async fn wait_for<T, E, F, Fut, P>(
    deadline: Duration,
    interval: Duration,
    mut fetch: F,
    mut ready: P,
) -> Result<T, WaitError<E>>
where
    E: std::error::Error,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&T) -> bool,
{
    let poll = async {
        loop {
            let value = fetch().await.map_err(WaitError::Fetch)?;
            if ready(&value) {
                return Ok(value);
            }
            sleep(interval).await;
        }
    };

    match timeout(deadline, poll).await {
        Ok(result) => result,
        Err(_) => Err(WaitError::Deadline(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Error, Debug, PartialEq)]
    #[error("probe failed")]
    struct ProbeError;

    const SECOND: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn returns_first_ready_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let status = wait_for(
            Duration::from_secs(60),
            SECOND,
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok::<_, ProbeError>(if n < 3 { "PENDING" } else { "ACTIVE" }) }
            },
            |status| *status == "ACTIVE",
        )
        .await
        .unwrap();

        assert_eq!(status, "ACTIVE");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_the_deadline() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let result = wait_for(
            Duration::from_secs(5),
            SECOND,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, ProbeError>("PENDING") }
            },
            |status| *status == "ACTIVE",
        )
        .await;

        assert!(matches!(result, Err(WaitError::Deadline(d)) if d == Duration::from_secs(5)));
        // One immediate fetch plus one per elapsed interval.
        assert!(calls.load(Ordering::SeqCst) >= 5);
    }

    #[tokio::test(start_paused = true)]
    async fn aborts_on_fetch_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let result: Result<&str, _> = wait_for(
            Duration::from_secs(60),
            SECOND,
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if n < 3 {
                        Ok("PENDING")
                    } else {
                        Err(ProbeError)
                    }
                }
            },
            |status| *status == "ACTIVE",
        )
        .await;

        assert!(matches!(result, Err(WaitError::Fetch(ProbeError))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
