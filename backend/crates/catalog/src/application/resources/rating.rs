//! Rating resource

use kernel::validation::ValidationErrors;
use serde::Serialize;

use crate::application::form::FormFields;
use crate::application::resource::{FormMode, FormModel, Kind, Resource};
use crate::domain::entity::Rating;
use crate::error::CatalogResult;

const MAX_RATING_CHARS: usize = 125;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingForm {
    pub id: Option<i32>,
    pub moodys_rating: String,
    #[serde(rename = "sandPRating")]
    pub sand_p_rating: String,
    pub fitch_rating: String,
    pub order_number: Option<i32>,
}

impl FormModel for RatingForm {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RatingResource;

impl Resource for RatingResource {
    type Record = Rating;
    type Form = RatingForm;

    const KIND: Kind = Kind {
        slug: "rating",
        label: "rating",
        title: "Rating",
        list_key: "ratings",
        form_key: "rating",
    };

    fn bind(&self, fields: &FormFields, errors: &mut ValidationErrors) -> RatingForm {
        RatingForm {
            id: fields.id(),
            moodys_rating: fields.text("moodysRating"),
            sand_p_rating: fields.text("sandPRating"),
            fitch_rating: fields.text("fitchRating"),
            order_number: fields.number("orderNumber", errors),
        }
    }

    fn validate(&self, form: &RatingForm, _mode: FormMode, errors: &mut ValidationErrors) {
        errors
            .not_blank("moodysRating", &form.moodys_rating, "Moody's rating is mandatory")
            .max_chars(
                "moodysRating",
                &form.moodys_rating,
                MAX_RATING_CHARS,
                "Moody's rating must be at most 125 characters",
            )
            .not_blank("sandPRating", &form.sand_p_rating, "S&P rating is mandatory")
            .max_chars(
                "sandPRating",
                &form.sand_p_rating,
                MAX_RATING_CHARS,
                "S&P rating must be at most 125 characters",
            )
            .not_blank("fitchRating", &form.fitch_rating, "Fitch rating is mandatory")
            .max_chars(
                "fitchRating",
                &form.fitch_rating,
                MAX_RATING_CHARS,
                "Fitch rating must be at most 125 characters",
            )
            .required("orderNumber", &form.order_number, "Order number is mandatory");
    }

    fn to_form(&self, record: &Rating) -> RatingForm {
        RatingForm {
            id: record.id,
            moodys_rating: record.moodys_rating.clone(),
            sand_p_rating: record.sand_p_rating.clone(),
            fitch_rating: record.fitch_rating.clone(),
            order_number: record.order_number,
        }
    }

    fn to_record(&self, form: &RatingForm) -> CatalogResult<Rating> {
        let mut record = Rating::default();
        self.apply(form, &mut record)?;
        Ok(record)
    }

    fn apply(&self, form: &RatingForm, record: &mut Rating) -> CatalogResult<()> {
        record.moodys_rating = form.moodys_rating.clone();
        record.sand_p_rating = form.sand_p_rating.clone();
        record.fitch_rating = form.fitch_rating.clone();
        record.order_number = form.order_number;
        Ok(())
    }
}
