//! Contact payloads: the vCard behind the QR code and the WhatsApp link.

use crate::snapshot::CardSnapshot;

/// Image service that turns the encoded vCard into a QR code.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Pixel size requested from the QR service.
pub const QR_IMAGE_SIZE: u32 = 120;

/// Quiet-zone margin requested from the QR service.
pub const QR_MARGIN: u32 = 4;

/// Displayed size of the QR image in the card.
pub const QR_DISPLAY_SIZE: u32 = 72;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Build the vCard 3.0 record for the card's contact fields.
///
/// Lines whose source field is absent are left out. Lines are joined
/// with CRLF.
pub fn vcard(snapshot: &CardSnapshot) -> String {
    let mut lines: Vec<String> = vec!["BEGIN:VCARD".into(), "VERSION:3.0".into()];

    if let Some(name) = &snapshot.name {
        lines.push(format!("FN:{name}"));
        lines.push(format!("N:{};;;", structured_name(name)));
    }
    if let Some(role) = &snapshot.role {
        lines.push(format!("TITLE:{role}"));
    }
    if let Some(phone) = &snapshot.phone {
        lines.push(format!("TEL;TYPE=CELL:{}", digits_only(phone)));
    }
    if let Some(email) = &snapshot.email {
        lines.push(format!("EMAIL;TYPE=INTERNET:{email}"));
    }
    if let Some(address) = &snapshot.address {
        lines.push(format!("ADR;TYPE=WORK:;;{address};;;;"));
    }

    lines.push("END:VCARD".into());
    lines.join("\r\n")
}

/// The `N` property value: tokens split on single spaces, reversed.
///
/// Only two-token names come out as "last;first". Longer names are
/// reversed whole ("Ana Maria Gomez" gives "Gomez;Maria;Ana").
pub fn structured_name(full_name: &str) -> String {
    full_name.split(' ').rev().collect::<Vec<_>>().join(";")
}

/// Strip every character that is not an ASCII digit.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// URL of the QR image encoding this card's vCard.
pub fn qr_image_url(snapshot: &CardSnapshot) -> String {
    format!(
        "{QR_ENDPOINT}?size={QR_IMAGE_SIZE}x{QR_IMAGE_SIZE}&margin={QR_MARGIN}&data={}",
        urlencoding::encode(&vcard(snapshot))
    )
}

/// WhatsApp chat link for the phone number, used verbatim.
///
/// Unlike the vCard phone line, separators are not stripped here.
/// Empty when there is no phone.
pub fn whatsapp_url(phone: Option<&str>) -> String {
    match phone {
        Some(phone) if !phone.is_empty() => format!("{WHATSAPP_BASE}{phone}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeSet;

    fn snapshot(pairs: &[(&str, &str)]) -> CardSnapshot {
        let attrs: AttributeSet = pairs.iter().copied().collect();
        CardSnapshot::from_attributes(&attrs)
    }

    #[test]
    fn minimal_vcard_has_only_markers() {
        assert_eq!(
            vcard(&CardSnapshot::default()),
            "BEGIN:VCARD\r\nVERSION:3.0\r\nEND:VCARD"
        );
    }

    #[test]
    fn full_vcard_line_order() {
        let snap = snapshot(&[
            ("name", "Ana Gomez"),
            ("role", "CEO"),
            ("phone", "+57 (300) 555-1234"),
            ("email", "ana@acme.co"),
            ("address", "Calle 1 #2-3"),
            ("nit", "900.123.456-7"),
        ]);
        let lines: Vec<_> = vcard(&snap).split("\r\n").map(str::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Ana Gomez",
                "N:Gomez;Ana;;;",
                "TITLE:CEO",
                "TEL;TYPE=CELL:573005551234",
                "EMAIL;TYPE=INTERNET:ana@acme.co",
                "ADR;TYPE=WORK:;;Calle 1 #2-3;;;;",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn three_token_name_is_fully_reversed() {
        let card = vcard(&snapshot(&[("name", "Ana Maria Gomez")]));
        assert!(card.contains("\r\nN:Gomez;Maria;Ana;;;\r\n"));
        assert!(card.contains("\r\nFN:Ana Maria Gomez\r\n"));
    }

    #[test]
    fn double_space_keeps_empty_token() {
        assert_eq!(structured_name("Ana  Gomez"), "Gomez;;Ana");
    }

    #[test]
    fn phone_is_stripped_in_vcard_but_not_in_link() {
        let snap = snapshot(&[("phone", "555-1234")]);
        assert!(vcard(&snap).contains("TEL;TYPE=CELL:5551234"));
        assert_eq!(whatsapp_url(snap.phone.as_deref()), "https://wa.me/555-1234");
    }

    #[test]
    fn whatsapp_url_empty_without_phone() {
        assert_eq!(whatsapp_url(None), "");
    }

    #[test]
    fn qr_url_embeds_encoded_vcard() {
        let snap = snapshot(&[("name", "Ana Gomez")]);
        let url = qr_image_url(&snap);
        let data = url
            .strip_prefix("https://api.qrserver.com/v1/create-qr-code/?size=120x120&margin=4&data=")
            .unwrap();
        assert!(!data.contains(' '));
        assert!(!data.contains('\r'));
        assert_eq!(urlencoding::decode(data).unwrap(), vcard(&snap));
    }

    #[test]
    fn nit_is_not_part_of_vcard() {
        let card = vcard(&snapshot(&[("nit", "900.123")]));
        assert!(!card.contains("900.123"));
    }
}
