//! Prospect form state and the prospects added this session.

#[cfg(test)]
#[path = "prospects_test.rs"]
mod prospects_test;

use payloads::{NewProspect, Prospect};

/// Field selector for [`ProspectForm::set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProspectField {
    Email,
    FirstName,
    LastName,
    Company,
    Title,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProspectForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub title: String,
}

impl ProspectForm {
    pub fn get(&self, field: ProspectField) -> &str {
        match field {
            ProspectField::Email => &self.email,
            ProspectField::FirstName => &self.first_name,
            ProspectField::LastName => &self.last_name,
            ProspectField::Company => &self.company,
            ProspectField::Title => &self.title,
        }
    }

    pub fn set(&mut self, field: ProspectField, value: String) {
        let slot = match field {
            ProspectField::Email => &mut self.email,
            ProspectField::FirstName => &mut self.first_name,
            ProspectField::LastName => &mut self.last_name,
            ProspectField::Company => &mut self.company,
            ProspectField::Title => &mut self.title,
        };
        *slot = value;
    }

    pub fn to_request(&self) -> NewProspect {
        NewProspect {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            title: self.title.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProspectsState {
    pub form: ProspectForm,
    pub pending: bool,
    /// Prospects created in this session, oldest first.
    pub created: Vec<Prospect>,
}

impl ProspectsState {
    pub fn begin_submit(&mut self) -> Option<NewProspect> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.form.to_request())
    }

    /// Store the created prospect and clear the form for the next entry.
    pub fn record_created(&mut self, prospect: Prospect) {
        self.pending = false;
        self.created.push(prospect);
        self.form = ProspectForm::default();
    }

    pub fn fail(&mut self) {
        self.pending = false;
    }
}
