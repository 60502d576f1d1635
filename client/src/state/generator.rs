//! Copy generator form state.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use payloads::{DEFAULT_TONE, GenerateRequest, GeneratedEmail};

/// Field selector for [`GeneratorForm::set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorField {
    Product,
    Audience,
    Tone,
    CallToAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorForm {
    pub product: String,
    pub audience: String,
    pub tone: String,
    pub call_to_action: String,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self {
            product: String::new(),
            audience: String::new(),
            tone: DEFAULT_TONE.to_owned(),
            call_to_action: String::new(),
        }
    }
}

impl GeneratorForm {
    pub fn get(&self, field: GeneratorField) -> &str {
        match field {
            GeneratorField::Product => &self.product,
            GeneratorField::Audience => &self.audience,
            GeneratorField::Tone => &self.tone,
            GeneratorField::CallToAction => &self.call_to_action,
        }
    }

    pub fn set(&mut self, field: GeneratorField, value: String) {
        let slot = match field {
            GeneratorField::Product => &mut self.product,
            GeneratorField::Audience => &mut self.audience,
            GeneratorField::Tone => &mut self.tone,
            GeneratorField::CallToAction => &mut self.call_to_action,
        };
        *slot = value;
    }

    pub fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            product: self.product.clone(),
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            call_to_action: self.call_to_action.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GeneratorState {
    pub form: GeneratorForm,
    pub pending: bool,
    /// Latest generated copy, kept until the next successful generation.
    pub result: Option<GeneratedEmail>,
}

impl GeneratorState {
    pub fn begin_submit(&mut self) -> Option<GenerateRequest> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.form.to_request())
    }

    pub fn record_generated(&mut self, email: GeneratedEmail) {
        self.pending = false;
        self.result = Some(email);
    }

    pub fn fail(&mut self) {
        self.pending = false;
    }
}
