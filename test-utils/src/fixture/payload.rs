//! Form payloads as posted by the front-end.

/// Field pairs in the order the browser serializes them.
pub type FormPairs = Vec<(String, String)>;

fn pairs(fields: &[(&str, &str)]) -> FormPairs {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// A complete general event registration.
pub fn inscription() -> FormPairs {
    pairs(&[
        ("nome", "  Ana Souza  "),
        ("email", "ana.souza@usp.br"),
        ("telefone", "+55 (11) 9-8888-7777"),
        ("faculdade", "Escola Politécnica"),
        ("nusp", "12.345.678"),
        ("curso", "Engenharia Elétrica"),
        ("ingresso", "2023"),
        ("membro_ieee", "sim"),
        ("voluntario_ieee", "nao"),
        ("divulgacao", "instagram"),
        ("indicacao", ""),
        ("_hp", ""),
    ])
}

/// A complete hackathon team with two student numbers filled in.
pub fn hackathon_team() -> FormPairs {
    pairs(&[
        ("nome1", "Ana Souza"),
        ("nusp1", "1111111"),
        ("nome2", "Bruno Lima"),
        ("nusp2", ""),
        ("nome3", "Carla Dias"),
        ("nusp3", "3333333"),
        ("celular", "(11) 97777-6666"),
        ("email", "time@usp.br"),
        ("_hp", ""),
    ])
}

/// A complete fiber optics workshop signup.
pub fn fiber_signup() -> FormPairs {
    pairs(&[
        ("nome", "Diego Ramos"),
        ("telefone", "11 95555-4444"),
        ("nusp", ""),
        ("_hp", ""),
    ])
}

/// A complete quantum computing workshop signup.
pub fn quantum_signup() -> FormPairs {
    pairs(&[
        ("nome", "Elisa Prado"),
        ("telefone", "11 93333-2222"),
        ("email", "elisa@usp.br"),
        ("nusp", "9876543"),
        ("_hp", ""),
    ])
}

/// Replaces or appends a field.
pub fn with_field(mut form: FormPairs, name: &str, value: &str) -> FormPairs {
    match form.iter_mut().find(|(field, _)| field == name) {
        Some(pair) => pair.1 = value.to_string(),
        None => form.push((name.to_string(), value.to_string())),
    }
    form
}

/// Removes a field entirely.
pub fn without_field(mut form: FormPairs, name: &str) -> FormPairs {
    form.retain(|(field, _)| field != name);
    form
}
