// End-to-end tests: CSV files in, threshold report out
use std::io::Write;

use tempfile::NamedTempFile;

use fareseer::ingest::{read_airport_table, read_query_flights, read_training_flights};
use fareseer::{NeighbourPredictor, PredictorConfig, ReportConfig};
use fareseer_predict::report::{relative_errors, success_count, threshold_report};

const TRAINING_HEADER: &str = "date,dayofmonth,weekday,outbounddate,outbounddayofmonth,\
outboundweekday,inbounddate,inbounddayofmonth,inboundweekday,originairport,origincitycode,\
origincountry,destinationairport,destinationcitycode,destinationcountry,carriercode,\
carriertype,adults,children,daystodeparture,dayslengthofstay,priceusd,platform,isota";

const TESTING_HEADER: &str = "date,outbounddate,inbounddate,originairport,destinationairport,\
carriercode,carriertype,adults,children,priceusd,platform,isota";

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn airports_file() -> NamedTempFile {
    write_file("VIE,VIEN,AT\nSOF,SOFI,BG\nJFK,NYC,US\n")
}

#[test]
fn test_end_to_end_prediction_and_report() {
    // one training flight: 200 USD for 2 adults, VIE -> SOF
    let training = write_file(&format!(
        "{TRAINING_HEADER}\n\
         2015-09-01,1,2,2015-09-15,15,2,2015-09-20,20,7,VIE,VIEN,AT,SOF,SOFI,BG,FB,legacy,2,0,14,5,200,web,0\n"
    ));
    // one query flight on the same itinerary: 1 adult, real price 150
    let testing = write_file(&format!(
        "{TESTING_HEADER}\n\
         2015-09-01,2015-09-15,2015-09-20,VIE,SOF,FB,legacy,1,0,150,web,0\n"
    ));
    let airports = airports_file();

    let airport_table = read_airport_table(airports.path()).unwrap();
    let training_flights = read_training_flights(training.path()).unwrap();
    let testing_flights = read_query_flights(testing.path(), &airport_table).unwrap();

    assert_eq!(training_flights.len(), 1);
    assert!(testing_flights[0].is_complete());

    let predictor =
        NeighbourPredictor::fit(training_flights, PredictorConfig::default()).unwrap();
    let predictions = predictor
        .predict(&testing_flights)
        .collect::<fareseer_predict::Result<Vec<_>>>()
        .unwrap();

    // 200 / 2 travellers predicted, 150 / 1 traveller real
    assert_eq!(predictions[0].predicted, 100.0);
    assert_eq!(predictions[0].real, 150.0);

    let errors = relative_errors(&predictions).unwrap();
    assert!((errors[0] - 1.0 / 3.0).abs() < 1e-12);

    let report = threshold_report(&errors, &ReportConfig::default());
    let at_30 = report.iter().find(|b| b.threshold_pct == 30).unwrap();
    assert_eq!(at_30.count, 0);
    let at_35 = report.iter().find(|b| b.threshold_pct == 35).unwrap();
    assert_eq!(at_35.count, 1);
    assert_eq!(at_35.share_pct, 100.0);
}

#[test]
fn test_nearest_itinerary_wins() {
    let training = write_file(&format!(
        "{TRAINING_HEADER}\n\
         2015-09-01,1,2,2015-09-15,15,2,2015-09-20,20,7,VIE,VIEN,AT,SOF,SOFI,BG,FB,legacy,1,0,14,5,100,web,0\n\
         2015-09-01,1,2,2015-10-15,15,4,2015-10-20,20,2,VIE,VIEN,AT,JFK,NYC,US,DL,legacy,1,0,44,5,900,web,0\n"
    ));
    let testing = write_file(&format!(
        "{TESTING_HEADER}\n\
         2015-09-01,2015-10-15,2015-10-20,VIE,JFK,DL,legacy,1,0,850,web,0\n"
    ));
    let airports = airports_file();

    let airport_table = read_airport_table(airports.path()).unwrap();
    let training_flights = read_training_flights(training.path()).unwrap();
    let testing_flights = read_query_flights(testing.path(), &airport_table).unwrap();

    let predictor =
        NeighbourPredictor::fit(training_flights, PredictorConfig::default()).unwrap();
    let prediction = predictor.predict_one(&testing_flights[0]).unwrap();

    // the transatlantic training flight is the nearest neighbour
    assert_eq!(prediction.predicted, 900.0);
    assert_eq!(prediction.real, 850.0);

    let errors = relative_errors(&[prediction]).unwrap();
    assert_eq!(success_count(&errors, 0.10), 1);
}

#[test]
fn test_identical_query_has_zero_error() {
    let row = "2015-09-01,1,2,2015-09-15,15,2,2015-09-20,20,7,VIE,VIEN,AT,SOF,SOFI,BG,FB,legacy,2,0,14,5,200,web,0";
    let training = write_file(&format!("{TRAINING_HEADER}\n{row}\n"));
    let testing = write_file(&format!("{TRAINING_HEADER}\n{row}\n"));

    let airport_table = read_airport_table(airports_file().path()).unwrap();
    let training_flights = read_training_flights(training.path()).unwrap();
    let testing_flights = read_query_flights(testing.path(), &airport_table).unwrap();

    let predictor =
        NeighbourPredictor::fit(training_flights, PredictorConfig::default()).unwrap();
    let prediction = predictor.predict_one(&testing_flights[0]).unwrap();

    assert_eq!(prediction.predicted, prediction.real);
    let errors = relative_errors(&[prediction]).unwrap();
    assert_eq!(errors[0], 0.0);
}
