use chrono::Days;

use crate::{
    consts::consts::EntityId,
    model::{
        lead::{Lead, LeadStatus, NewLead, UpdateLeadData},
        Draft,
    },
};

use super::{
    aggregate::{AgentStats, LeadStats},
    filter::{filter, LeadQuery},
    table::{
        non_empty, set_optional, set_required, set_text, set_value, ApplyContext, ApplyErrors,
        Placement, RecordTable,
    },
};

/// Newest leads are shown first, so additions go to the front of the list
pub struct LeadTable {
    table: RecordTable<Lead>,
}

impl LeadTable {
    pub fn new() -> Self {
        Self {
            table: RecordTable::new(Placement::Front),
        }
    }

    pub fn from_leads(leads: Vec<Lead>) -> Self {
        Self {
            table: RecordTable::from_rows(leads, Placement::Front),
        }
    }

    pub fn leads(&self) -> &[Lead] {
        self.table.rows()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn add(&mut self, draft: NewLead, context: &ApplyContext) -> Result<Lead, ApplyErrors> {
        if let Some(field) = draft.first_missing_field() {
            return Err(ApplyErrors::MissingRequiredField(field.to_string()));
        }

        let next_follow_up = context
            .today
            .checked_add_days(Days::new(u64::from(context.follow_up_days)))
            .ok_or(ApplyErrors::FollowUpOutOfRange(context.follow_up_days))?;

        let lead = Lead {
            id: self.table.next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            source: draft.source,
            status: LeadStatus::New,
            assigned_agent: draft.assigned_agent,
            date: context.today,
            next_follow_up: Some(next_follow_up),
            notes: non_empty(draft.notes),
        };

        self.table.insert(lead.clone());

        Ok(lead)
    }

    pub fn update_status(
        &mut self,
        id: &EntityId,
        status: LeadStatus,
    ) -> Result<Lead, ApplyErrors> {
        self.table.replace(id, |current| {
            let mut lead = current.clone();
            lead.status = status;
            Ok(lead)
        })
    }

    pub fn update(&mut self, id: &EntityId, update: UpdateLeadData) -> Result<Lead, ApplyErrors> {
        self.table
            .replace(id, |current| apply_lead_update(current, update))
    }

    pub fn get(&self, id: &EntityId) -> Result<Lead, ApplyErrors> {
        self.table
            .get(id)
            .cloned()
            .ok_or(ApplyErrors::CannotGetDoesNotExist(id.clone()))
    }

    pub fn list(&self, query: Option<&LeadQuery>) -> Vec<Lead> {
        let leads = self.table.rows().to_vec();

        match query {
            Some(query) => filter(leads, query),
            None => leads,
        }
    }

    pub fn stats(&self) -> LeadStats {
        LeadStats::from_leads(self.table.rows())
    }

    pub fn agent_stats(&self, agent: &str) -> AgentStats {
        AgentStats::from_leads(agent, self.table.rows())
    }
}

impl Default for LeadTable {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_lead_update(current: &Lead, update: UpdateLeadData) -> Result<Lead, ApplyErrors> {
    let mut lead = current.clone();

    set_required("Name", update.name, &mut lead.name)?;
    set_required("Email", update.email, &mut lead.email)?;
    set_text(update.phone, &mut lead.phone);
    set_text(update.company, &mut lead.company);
    set_value("Source", update.source, &mut lead.source)?;
    set_value("Status", update.status, &mut lead.status)?;
    set_text(update.assigned_agent, &mut lead.assigned_agent);

    set_optional(update.next_follow_up, &mut lead.next_follow_up);
    set_optional(update.notes, &mut lead.notes);

    Ok(lead)
}
