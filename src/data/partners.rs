use crate::models::Partner;

pub static PARTNERS: [Partner; 12] = [
    Partner { name: "G.N.L.B.S", photo: "gnlbs.jpg" },
    Partner { name: "AELEX", photo: "aelex.jpg" },
    Partner { name: "Embassy of Belgium in Abuja", photo: "belgian.png" },
    Partner { name: "British High Commission", photo: "britishhc.jpeg" },
    Partner { name: "EHA CLINICS", photo: "ehaclinics.jpg" },
    Partner { name: "Pizza Hut", photo: "pizzahut.jpg" },
    Partner { name: "Alphaforth", photo: "alphafort.jpg" },
    Partner { name: "Prime Elevated Ltd.", photo: "prime.jpg" },
    Partner { name: "U-Connect Human Resources Ltd.", photo: "uconnect.jpg" },
    Partner { name: "Omon's Couch", photo: "omon.jpg" },
    Partner { name: "FINE AND COUNTRY NG", photo: "fic.jpg" },
    Partner { name: "CameraJoint NG", photo: "camerajoint.jpg" },
];

/// The first partner is the headline sponsor; the rest are supporting partners.
pub fn headline_and_supporting() -> Option<(&'static Partner, &'static [Partner])> {
    PARTNERS.split_first()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_is_first_partner() {
        let (headline, supporting) = headline_and_supporting().unwrap();
        assert_eq!(headline.name, "G.N.L.B.S");
        assert_eq!(supporting.len(), 11);
        assert_eq!(headline.image_url(), "/images/partners/gnlbs.jpg");
    }
}
