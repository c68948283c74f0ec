//! Input validation helpers.

/// Strip formatting, keep digits only.
pub fn clean_cpf(cpf: &str) -> String {
    cpf.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CPF check-digit validation (mod-11 over both verifier digits).
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = clean_cpf(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 {
        return false;
    }
    // All-equal sequences pass the checksum but are not real CPFs
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let verifier = |len: usize| -> u32 {
        let weight = (len + 1) as u32;
        let soma: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (weight - i as u32))
            .sum();
        let resto = (soma * 10) % 11;
        if resto == 10 { 0 } else { resto }
    };

    verifier(9) == digits[9] && verifier(10) == digits[10]
}
