//! In-memory service fakes for controller and route tests.
//!
//! Each fake stores records in a `Vec`, records every call it receives, and
//! can be told to report a fixed outcome for `update`/`delete`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::citizens::{Citizen, CitizensService};
use crate::features::complaints::{Complaint, ComplaintsService};

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall<T> {
    GetAll,
    GetById(i32),
    Search(String),
    Create(T),
    Update(T),
    Delete(i32),
}

impl<T> ServiceCall<T> {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            ServiceCall::Create(_) | ServiceCall::Update(_) | ServiceCall::Delete(_)
        )
    }
}

pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
    fn search_text(&self) -> &str;

    /// Fill in values the database defaults on insert
    fn apply_insert_defaults(&mut self) {}

    /// Carry over stored values an update leaves unset
    fn keep_unset_from(&mut self, _stored: &Self) {}
}

impl Record for Citizen {
    fn id(&self) -> i32 {
        self.citizen_id
    }

    fn set_id(&mut self, id: i32) {
        self.citizen_id = id;
    }

    fn search_text(&self) -> &str {
        &self.full_name
    }
}

impl Record for Complaint {
    fn id(&self) -> i32 {
        self.complaint_id
    }

    fn set_id(&mut self, id: i32) {
        self.complaint_id = id;
    }

    fn search_text(&self) -> &str {
        &self.title
    }

    fn apply_insert_defaults(&mut self) {
        self.date_filed.get_or_insert_with(|| chrono::Local::now().date_naive());
    }

    fn keep_unset_from(&mut self, stored: &Self) {
        if self.date_filed.is_none() {
            self.date_filed = stored.date_filed;
        }
    }
}

pub struct FakeService<T> {
    records: Mutex<Vec<T>>,
    calls: Mutex<Vec<ServiceCall<T>>>,
    update_outcome: Option<bool>,
    delete_outcome: Option<bool>,
}

impl<T: Record> FakeService<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: Mutex::new(Vec::new()),
            update_outcome: None,
            delete_outcome: None,
        }
    }

    /// Force `update` to report `outcome` regardless of stored records
    pub fn with_update_outcome(mut self, outcome: bool) -> Self {
        self.update_outcome = Some(outcome);
        self
    }

    /// Force `delete` to report `outcome` regardless of stored records
    pub fn with_delete_outcome(mut self, outcome: bool) -> Self {
        self.delete_outcome = Some(outcome);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<ServiceCall<T>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.is_write()).count()
    }

    pub fn records(&self) -> Vec<T> {
        self.records.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall<T>) {
        self.calls.lock().unwrap().push(call);
    }

    fn all(&self) -> Vec<T> {
        self.record(ServiceCall::GetAll);
        self.records()
    }

    fn find(&self, id: i32) -> Option<T> {
        self.record(ServiceCall::GetById(id));
        self.records().into_iter().find(|r| r.id() == id)
    }

    fn search(&self, term: &str) -> Vec<T> {
        self.record(ServiceCall::Search(term.to_string()));
        let needle = term.to_lowercase();
        self.records()
            .into_iter()
            .filter(|r| r.search_text().to_lowercase().contains(&needle))
            .collect()
    }

    fn insert(&self, record: &T) {
        self.record(ServiceCall::Create(record.clone()));
        let mut records = self.records.lock().unwrap();
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        let mut stored = record.clone();
        stored.set_id(next_id);
        stored.apply_insert_defaults();
        records.push(stored);
    }

    fn replace(&self, record: &T) -> bool {
        self.record(ServiceCall::Update(record.clone()));
        let mut records = self.records.lock().unwrap();
        let position = records.iter().position(|r| r.id() == record.id());
        if let Some(outcome) = self.update_outcome {
            return outcome;
        }
        match position {
            Some(index) => {
                let mut updated = record.clone();
                updated.keep_unset_from(&records[index]);
                records[index] = updated;
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: i32) -> bool {
        self.record(ServiceCall::Delete(id));
        if let Some(outcome) = self.delete_outcome {
            return outcome;
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != id);
        records.len() != before
    }
}

#[async_trait]
impl CitizensService for FakeService<Citizen> {
    async fn get_all(&self) -> Result<Vec<Citizen>> {
        Ok(self.all())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Citizen>> {
        Ok(self.find(id))
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Citizen>> {
        Ok(self.search(name))
    }

    async fn create(&self, citizen: &Citizen) -> Result<()> {
        self.insert(citizen);
        Ok(())
    }

    async fn update(&self, citizen: &Citizen) -> Result<bool> {
        Ok(self.replace(citizen))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.remove(id))
    }
}

#[async_trait]
impl ComplaintsService for FakeService<Complaint> {
    async fn get_all(&self) -> Result<Vec<Complaint>> {
        Ok(self.all())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Complaint>> {
        Ok(self.find(id))
    }

    async fn search_by_title(&self, title: &str) -> Result<Vec<Complaint>> {
        Ok(self.search(title))
    }

    async fn create(&self, complaint: &Complaint) -> Result<()> {
        self.insert(complaint);
        Ok(())
    }

    async fn update(&self, complaint: &Complaint) -> Result<bool> {
        Ok(self.replace(complaint))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.remove(id))
    }
}

pub type FakeCitizens = FakeService<Citizen>;
pub type FakeComplaints = FakeService<Complaint>;

/// A small registry of citizens with ids 1..=3
pub fn sample_citizens() -> Vec<Citizen> {
    vec![
        Citizen::new(1, "Ion Popescu"),
        Citizen::new(2, "Maria Ionescu"),
        Citizen::new(3, "Ana-Maria Dumitrescu"),
    ]
}
