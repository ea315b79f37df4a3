use std::marker::PhantomData;

use crate::client::ClassClient;
use crate::domain::RecordId;
use crate::error::ClassError;
use crate::resources::{GetOptions, SetOptions};

/// Contract a record type must satisfy to go through the generic
/// get/reconcile machinery.
pub(crate) trait PortalRecord: Clone + serde::de::DeserializeOwned {
    fn id(&self) -> &RecordId;
    /// Equality over the caller-submitted fields, ignoring the id and any
    /// server-populated processing detail.
    fn same_spec(&self, other: &Self) -> bool;
    /// Whether the portal is still processing background work for this record.
    fn is_pending(&self) -> bool;
    /// Form encoding for create/edit submission.
    fn form(&self) -> Vec<(&'static str, String)>;
}

/// Generic accessor for one product collection (`subscriptions/gvar_img`,
/// `requests/gvar_img`, ...).
pub(crate) struct ResourceClient<'a, R> {
    client: &'a ClassClient,
    path: &'static str,
    _record: PhantomData<R>,
}

impl<'a, R: PortalRecord> ResourceClient<'a, R> {
    pub(crate) fn new(client: &'a ClassClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _record: PhantomData,
        }
    }

    /// Fetch the current server-side collection.
    pub(crate) async fn get(&self, options: GetOptions) -> Result<Vec<R>, ClassError> {
        if !options.wait_for_completion {
            return self.client.get_json(&self.listing_path(options)).await;
        }
        // Pending state lives in the per-record processing detail, which a
        // plain listing omits, so the poll always fetches it regardless of
        // what the caller asked for.
        let detailed = self.listing_path(GetOptions {
            append_files: true,
            wait_for_completion: false,
        });
        let mut attempts = 0;
        loop {
            let records: Vec<R> = self.client.get_json(&detailed).await?;
            if records.iter().all(|record| !record.is_pending()) {
                if options.append_files {
                    return Ok(records);
                }
                return self.client.get_json(self.path).await;
            }
            attempts += 1;
            if attempts >= self.client.poll_max_attempts() {
                return Err(ClassError::ProcessingTimeout);
            }
            tokio::time::sleep(self.client.poll_interval()).await;
        }
    }

    fn listing_path(&self, options: GetOptions) -> String {
        if options.append_files {
            format!("{}?append_files=true", self.path)
        } else {
            self.path.to_string()
        }
    }

    /// Reconcile the server-side collection to `desired`: the `"+"`
    /// placeholder creates, a matching id edits when the submitted fields
    /// differ, and omission deletes.
    ///
    /// Returns the resulting collection in submission order, with
    /// server-assigned ids in place of placeholders.
    pub(crate) async fn set(&self, desired: &[R], options: SetOptions) -> Result<Vec<R>, ClassError> {
        // A duplicated id makes the reconcile ambiguous; reject it before
        // anything goes over the wire.
        for (i, record) in desired.iter().enumerate() {
            if !record.id().is_new() && desired[..i].iter().any(|d| d.id() == record.id()) {
                return Err(ClassError::Validation(format!(
                    "Record id {} appears more than once in the submitted collection.",
                    record.id()
                )));
            }
        }

        let current: Vec<R> = self.client.get_json(self.path).await?;

        let mut result = Vec::with_capacity(desired.len());
        for record in desired {
            match record.id() {
                RecordId::New => {
                    result.push(self.client.post_form(self.path, &record.form()).await?);
                }
                RecordId::Assigned(_) => {
                    let existing = current.iter().find(|c| c.id() == record.id());
                    match existing {
                        Some(existing) if existing.same_spec(record) => {
                            result.push(existing.clone());
                        }
                        // Edited, or unknown to the snapshot; the portal is
                        // the authority on whether the id exists.
                        _ => result.push(self.client.post_form(self.path, &record.form()).await?),
                    }
                }
            }
        }

        // Anything the caller left out of the collection is deleted
        // server-side.
        let doomed: Vec<&str> = current
            .iter()
            .filter(|c| !desired.iter().any(|d| d.id() == c.id()))
            .map(|c| c.id().as_str())
            .collect();
        self.client.bulk_delete(&doomed).await?;

        if options.wait_for_completion {
            // Await background processing; the polled snapshots are
            // discarded, the submission responses are what we return.
            self.get(GetOptions::default()).await?;
        }
        if options.auto_get {
            return self.get(GetOptions::snapshot()).await;
        }
        Ok(result)
    }
}
