//! Brazilian states and the localities the service covers.
//!
//! States are stored by their two-letter UF code. Only states where the
//! service operates have a locality list; every other state offers none.

/// `(UF code, name)` for all 27 federative units, sorted by name.
pub const STATES: &[(&str, &str)] = &[
    ("AC", "Acre"),
    ("AL", "Alagoas"),
    ("AP", "Amapá"),
    ("AM", "Amazonas"),
    ("BA", "Bahia"),
    ("CE", "Ceará"),
    ("DF", "Distrito Federal"),
    ("ES", "Espírito Santo"),
    ("GO", "Goiás"),
    ("MA", "Maranhão"),
    ("MT", "Mato Grosso"),
    ("MS", "Mato Grosso do Sul"),
    ("MG", "Minas Gerais"),
    ("PA", "Pará"),
    ("PB", "Paraíba"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("PI", "Piauí"),
    ("RJ", "Rio de Janeiro"),
    ("RN", "Rio Grande do Norte"),
    ("RS", "Rio Grande do Sul"),
    ("RO", "Rondônia"),
    ("RR", "Roraima"),
    ("SC", "Santa Catarina"),
    ("SP", "São Paulo"),
    ("SE", "Sergipe"),
    ("TO", "Tocantins"),
];

const SP: &[&str] = &[
    "Amparo",
    "Analândia",
    "Aparecida",
    "Arujá",
    "Biritiba Mirim",
    "Caçapava",
    "Cachoeira Paulista",
    "Campinas",
    "Cruzeiro",
    "Diadema",
    "Ferraz de Vasconcelos",
    "Guararema",
    "Guaratinguetá",
    "Guarulhos",
    "Igaratá",
    "Itaquaquecetuba",
    "Jacareí",
    "Jambeiro",
    "Lagoinha",
    "Lorena",
    "Mauá",
    "Mogi das Cruzes",
    "Monteiro Lobato",
    "Natividade da Serra",
    "Osasco",
    "Paraibuna",
    "Pindamonhangaba",
    "Poá",
    "Potim",
    "Queluz",
    "Redenção da Serra",
    "Ribeirão Pires",
    "Rio Grande da Serra",
    "Roseira",
    "Salesópolis",
    "Santa Branca",
    "Santa Isabel",
    "Santo André",
    "Santo Antônio do Pinhal",
    "Santos",
    "São Bento do Sapucaí",
    "São Bernardo do Campo",
    "São Caetano do Sul",
    "São José do Barreiro",
    "São José dos Campos",
    "São Luiz do Paraitinga",
    "São Paulo",
    "São Roque",
    "Silveiras",
    "Suzano",
    "Taubaté",
    "Tremembé",
    "Ubatuba",
];

const RJ: &[&str] = &[
    "Angra dos Reis",
    "Araruama",
    "Barra Mansa",
    "Belford Roxo",
    "Cabo Frio",
    "Campos dos Goytacazes",
    "Duque de Caxias",
    "Itaboraí",
    "Magé",
    "Mesquita",
    "Niterói",
    "Nova Friburgo",
    "Nova Iguaçu",
    "Petrópolis",
    "Resende",
    "Rio de Janeiro",
    "São Gonçalo",
    "São João de Meriti",
    "Teresópolis",
    "Volta Redonda",
];

const MG: &[&str] = &[
    "Barbacena",
    "Belo Horizonte",
    "Betim",
    "Contagem",
    "Divinópolis",
    "Governador Valadares",
    "Ibirité",
    "Ipatinga",
    "Juiz de Fora",
    "Montes Claros",
    "Patos de Minas",
    "Poços de Caldas",
    "Pouso Alegre",
    "Ribeirão das Neves",
    "Sabará",
    "Santa Luzia",
    "Sete Lagoas",
    "Teófilo Otoni",
    "Uberaba",
    "Uberlândia",
];

/// Localities offered for `uf`. Unknown or uncovered states yield an empty list.
pub fn localities(uf: &str) -> &'static [&'static str] {
    match uf.trim().to_uppercase().as_str() {
        "SP" => SP,
        "RJ" => RJ,
        "MG" => MG,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_states_present() {
        assert_eq!(STATES.len(), 27);
        assert!(STATES.contains(&("SP", "São Paulo")));
    }

    #[test]
    fn test_localities_per_state() {
        assert!(localities("SP").contains(&"Campinas"));
        assert!(!localities("RJ").contains(&"Campinas"));
        assert!(localities("rj").contains(&"Niterói"));
        assert!(localities("BA").is_empty());
        assert!(localities("").is_empty());
    }
}
