use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    factory,
    fixture::payload::{self, FormPairs},
};

use crate::server::{
    data::{
        database::DatabaseGateway,
        mock::{MockGateway, Reply},
    },
    error::submission::SubmissionError,
    model::{
        form::{FIBER_WORKSHOP, HACKATHON_TEAM, INSCRIPTION, QUANTUM_WORKSHOP},
        payload::FormPayload,
    },
};


fn form(pairs: FormPairs) -> FormPayload {
    FormPayload::from_pairs(pairs)
}
