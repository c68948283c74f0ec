//! Status enums and their wire representation.
//!
//! The backend is not consistent about how it serializes status fields: the
//! same field may arrive as a bare string (`"ativo"`) or wrapped in an object
//! (`{"value": "ativo"}`). That ambiguity is absorbed here, once, at the
//! serde boundary. Everything else in the crate works with real enums and
//! must never compare raw status strings.

use serde::{Deserialize, Deserializer};

/// The two shapes a status field can take on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Plain(String),
    Wrapped { value: String },
}

impl RawStatus {
    fn into_string(self) -> String {
        match self {
            RawStatus::Plain(s) => s,
            RawStatus::Wrapped { value } => value,
        }
    }
}

fn decode_status<'de, D, T>(deserializer: D, kind: &'static str) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw = RawStatus::deserialize(deserializer)?.into_string();
    raw.parse().map_err(|_| {
        serde::de::Error::custom(format!("unknown {} value: {:?}", kind, raw))
    })
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                decode_status(deserializer, stringify!($name))
            }
        }
    };
}

wire_enum! {
    /// Patron account status. Only `Ativo` patrons may receive loans.
    UsuarioStatus {
        Ativo => "ativo",
        Inativo => "inativo",
        Suspenso => "suspenso",
    }
}

wire_enum! {
    UsuarioRole {
        User => "user",
        Admin => "admin",
    }
}

wire_enum! {
    /// Physical copy status. `Disponivel` copies are the allocation pool.
    ExemplarStatus {
        Disponivel => "disponivel",
        Emprestado => "emprestado",
        Reservado => "reservado",
        Manutencao => "manutencao",
    }
}

wire_enum! {
    /// Stored loan status. `Atrasado` may lag behind the dates; listings
    /// must recompute overdue from `dataPrevistaDevolucao` instead of
    /// trusting this field.
    EmprestimoStatus {
        Ativo => "ativo",
        Devolvido => "devolvido",
        Atrasado => "atrasado",
    }
}

wire_enum! {
    /// Reservation status. Expiry is derived from `dataExpiracao` and is
    /// never a stored state.
    ReservaStatus {
        Ativa => "ativa",
        Cancelada => "cancelada",
        Concluida => "concluida",
    }
}
